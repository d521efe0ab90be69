//! Kaskady Server - backend for the Kaskady hotel website.
//!
//! Serves the static site and a small JSON API for contact messages, room
//! bookings, availability checks and newsletter signups. Records live in
//! JSON files on local disk; guest e-mails go through a pluggable notifier.
//!
//! # Architecture
//!
//! - **domain**: Value objects (room types, booking references, date ranges)
//! - **models**: Stored records and request bodies
//! - **store**: JSON-file record store with atomic writes
//! - **repositories**: Per-collection data access over the store
//! - **availability**: Remaining rooms per category for a date range
//! - **services**: Booking, contact and newsletter business logic
//! - **notify**: Guest e-mail templates and delivery
//! - **server**: HTTP routes and handlers
//! - **metrics**: Operational counters
//! - **config**: Configuration management from environment variables

pub mod availability;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod repositories;
pub mod server;
pub mod services;
pub mod store;

pub use availability::calculate_availability;
pub use config::Config;
pub use domain::{BookingReference, DateRange, RoomType, ValidationError};
pub use error::{ConfigError, NotifyError, ServiceError, StoreError};
pub use metrics::{MailTimer, Metrics, MetricsSummary};
pub use models::{Availability, Booking, Contact};
pub use server::{build_router, AppState};
pub use services::{BookingService, ContactService, NewsletterService};
pub use store::{AsyncJsonStore, JsonFileStore};
