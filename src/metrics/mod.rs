//! Basic metrics instrumentation for the booking site.
//!
//! Provides counters for stored records, notification delivery and masked
//! store read failures, plus duration tracking for outbound mail requests.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the store, the notifier and the services.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of outbound mail HTTP requests
    mail_requests_total: Arc<AtomicU64>,

    /// Total number of failed outbound mail HTTP requests
    mail_errors_total: Arc<AtomicU64>,

    /// Total duration of all mail requests in milliseconds
    mail_duration_total_ms: Arc<AtomicU64>,

    /// Bookings persisted
    bookings_created_total: Arc<AtomicU64>,

    /// Contact messages persisted
    contacts_received_total: Arc<AtomicU64>,

    /// New newsletter subscribers persisted
    subscribers_added_total: Arc<AtomicU64>,

    /// Notifications that could not be delivered
    notifications_failed_total: Arc<AtomicU64>,

    /// Collection reads that failed and were served as empty
    store_read_failures_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            mail_requests_total: Arc::new(AtomicU64::new(0)),
            mail_errors_total: Arc::new(AtomicU64::new(0)),
            mail_duration_total_ms: Arc::new(AtomicU64::new(0)),
            bookings_created_total: Arc::new(AtomicU64::new(0)),
            contacts_received_total: Arc::new(AtomicU64::new(0)),
            subscribers_added_total: Arc::new(AtomicU64::new(0)),
            notifications_failed_total: Arc::new(AtomicU64::new(0)),
            store_read_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a mail request with duration.
    pub fn record_mail_request(&self, duration: Duration) {
        self.mail_requests_total.fetch_add(1, Ordering::Relaxed);
        self.mail_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed mail request.
    pub fn record_mail_error(&self) {
        self.mail_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_booking_created(&self) {
        self.bookings_created_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_contact_received(&self) {
        self.contacts_received_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_subscriber_added(&self) {
        self.subscribers_added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_notification_failed(&self) {
        self.notifications_failed_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_read_failure(&self) {
        self.store_read_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Get total mail requests.
    pub fn mail_requests_total(&self) -> u64 {
        self.mail_requests_total.load(Ordering::Relaxed)
    }

    /// Get total mail errors.
    pub fn mail_errors_total(&self) -> u64 {
        self.mail_errors_total.load(Ordering::Relaxed)
    }

    /// Get total mail duration in milliseconds.
    pub fn mail_duration_total_ms(&self) -> u64 {
        self.mail_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average mail request duration in milliseconds.
    pub fn mail_duration_avg_ms(&self) -> f64 {
        let total = self.mail_duration_total_ms.load(Ordering::Relaxed);
        let count = self.mail_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn bookings_created_total(&self) -> u64 {
        self.bookings_created_total.load(Ordering::Relaxed)
    }

    pub fn contacts_received_total(&self) -> u64 {
        self.contacts_received_total.load(Ordering::Relaxed)
    }

    pub fn subscribers_added_total(&self) -> u64 {
        self.subscribers_added_total.load(Ordering::Relaxed)
    }

    pub fn notifications_failed_total(&self) -> u64 {
        self.notifications_failed_total.load(Ordering::Relaxed)
    }

    pub fn store_read_failures_total(&self) -> u64 {
        self.store_read_failures_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            mail_requests_total: self.mail_requests_total(),
            mail_errors_total: self.mail_errors_total(),
            mail_duration_total_ms: self.mail_duration_total_ms(),
            mail_duration_avg_ms: self.mail_duration_avg_ms(),
            bookings_created_total: self.bookings_created_total(),
            contacts_received_total: self.contacts_received_total(),
            subscribers_added_total: self.subscribers_added_total(),
            notifications_failed_total: self.notifications_failed_total(),
            store_read_failures_total: self.store_read_failures_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub mail_requests_total: u64,
    pub mail_errors_total: u64,
    pub mail_duration_total_ms: u64,
    pub mail_duration_avg_ms: f64,
    pub bookings_created_total: u64,
    pub contacts_received_total: u64,
    pub subscribers_added_total: u64,
    pub notifications_failed_total: u64,
    pub store_read_failures_total: u64,
}

/// Helper for timing mail relay requests.
pub struct MailTimer {
    start: Instant,
    metrics: Metrics,
}

impl MailTimer {
    /// Start timing a mail request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_mail_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_mail_request(duration);
        self.metrics.record_mail_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.mail_requests_total(), 0);
        assert_eq!(metrics.bookings_created_total(), 0);
        assert_eq!(metrics.store_read_failures_total(), 0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_mail_request(Duration::from_millis(100));
        metrics.record_mail_request(Duration::from_millis(200));
        assert_eq!(metrics.mail_requests_total(), 2);
        assert_eq!(metrics.mail_duration_total_ms(), 300);
        assert_eq!(metrics.mail_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_record_counters() {
        let metrics = Metrics::new();
        metrics.record_booking_created();
        metrics.record_booking_created();
        metrics.record_contact_received();
        metrics.record_subscriber_added();
        metrics.record_notification_failed();
        metrics.record_store_read_failure();

        let summary = metrics.summary();
        assert_eq!(summary.bookings_created_total, 2);
        assert_eq!(summary.contacts_received_total, 1);
        assert_eq!(summary.subscribers_added_total, 1);
        assert_eq!(summary.notifications_failed_total, 1);
        assert_eq!(summary.store_read_failures_total, 1);
    }

    #[test]
    fn test_mail_timer_with_error() {
        let metrics = Metrics::new();
        let timer = MailTimer::new(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.mail_requests_total(), 1);
        assert_eq!(metrics.mail_errors_total(), 1);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let metrics = Metrics::new();
        metrics.record_subscriber_added();
        let value = serde_json::to_value(metrics.summary()).unwrap();
        assert_eq!(value["subscribersAddedTotal"], 1);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_booking_created();
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_booking_created();
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.bookings_created_total(), 200);
    }
}
