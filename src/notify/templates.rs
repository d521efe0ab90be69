//! E-mail bodies sent to guests.

use super::Notification;
use crate::models::{Booking, Contact};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HTML_SPECIAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[&<>"']"#).expect("Failed to compile HTML escape regex"));

/// Escape text submitted by a guest before placing it in an HTML body.
pub fn escape_html(text: &str) -> String {
    HTML_SPECIAL_REGEX
        .replace_all(text, |caps: &Captures| match &caps[0] {
            "&" => "&amp;",
            "<" => "&lt;",
            ">" => "&gt;",
            "\"" => "&quot;",
            _ => "&#39;",
        })
        .into_owned()
}

pub fn booking_confirmation(booking: &Booking) -> Notification {
    Notification {
        to: booking.email.clone(),
        subject: format!("Booking Confirmation: {}", booking.reference),
        html_body: format!(
            "<h1>Booking Confirmed</h1>\
             <p>Reference: <strong>{}</strong></p>\
             <p>Room: {}</p>\
             <p>Nights: {}</p>\
             <p>Total Price: <span style=\"color:#d4af37\">€{}</span></p>",
            booking.reference,
            escape_html(&booking.room_type.to_uppercase()),
            booking.nights,
            booking.total_price
        ),
    }
}

pub fn contact_acknowledgement(contact: &Contact) -> Notification {
    Notification {
        to: contact.email.clone(),
        subject: "Thank you for contacting Kaskady".to_string(),
        html_body: format!(
            "<h1>Thank you, {}</h1>\
             <p>We have received your message and will get back to you shortly.</p>",
            escape_html(&contact.name)
        ),
    }
}

pub fn newsletter_welcome(email: &str) -> Notification {
    Notification {
        to: email.to_string(),
        subject: "Welcome to Kaskady".to_string(),
        html_body: "<h1>Welcome!</h1><p>You have been subscribed to our newsletter.</p>"
            .to_string(),
    }
}
