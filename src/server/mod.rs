//! HTTP server for the Kaskady website.
//!
//! Routes the JSON API to the services and serves the static site for
//! every other path.

pub mod handlers;

use crate::metrics::Metrics;
use crate::notify::Notifier;
use crate::repositories::{JsonBookingRepository, JsonContactRepository, JsonSubscriberRepository};
use crate::services::{
    BookingService, BookingServiceImpl, ContactService, ContactServiceImpl, NewsletterService,
    NewsletterServiceImpl,
};
use crate::store::AsyncJsonStore;
use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub booking_service: Arc<dyn BookingService>,
    pub contact_service: Arc<dyn ContactService>,
    pub newsletter_service: Arc<dyn NewsletterService>,
    pub metrics: Metrics,
}

impl AppState {
    /// Wire the services to JSON-file repositories sharing one store.
    pub fn with_store(
        store: AsyncJsonStore,
        notifier: Arc<dyn Notifier>,
        metrics: Metrics,
    ) -> Self {
        let bookings = Arc::new(JsonBookingRepository::new(store.clone()));
        let contacts = Arc::new(JsonContactRepository::new(store.clone()));
        let subscribers = Arc::new(JsonSubscriberRepository::new(store));

        Self {
            booking_service: Arc::new(BookingServiceImpl::new(
                bookings,
                notifier.clone(),
                metrics.clone(),
            )),
            contact_service: Arc::new(ContactServiceImpl::new(
                contacts,
                notifier.clone(),
                metrics.clone(),
            )),
            newsletter_service: Arc::new(NewsletterServiceImpl::new(
                subscribers,
                notifier,
                metrics.clone(),
            )),
            metrics,
        }
    }
}

/// The API routes alone, without static files or middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/booking", post(handlers::create_booking))
        .route("/api/booking/{reference}", get(handlers::get_booking))
        .route("/api/availability", get(handlers::check_availability))
        .route("/api/newsletter", post(handlers::subscribe))
        .with_state(state)
}

/// The full application: API, static site fallback, CORS and request tracing.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    api_routes(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:port` and serve until the process exits.
pub async fn run_server(router: Router, port: u16) -> Result<()> {
    let addr = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on http://localhost:{}", port);

    axum::serve(listener, router)
        .await
        .context("HTTP server failed")
}
