//! HTTP handlers for the website's API.
//!
//! Every response uses the same JSON envelope:
//! `{"success": bool, "message"?: string, "data"?: any}`.

use super::AppState;
use crate::error::ServiceError;
use crate::models::{
    Availability, AvailabilityQuery, Booking, BookingRequest, ContactRequest, NewsletterRequest,
};
use crate::services::SubscribeOutcome;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(message: Option<&str>, data: Option<T>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.map(str::to_string),
            data,
        })
    }
}

/// An error response: status code plus a client-safe message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Server error.")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            success: false,
            message: Some(self.message),
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => ApiError::new(StatusCode::BAD_REQUEST, e.to_string()),
            ServiceError::NotFound(_) => ApiError::new(StatusCode::NOT_FOUND, "Booking not found."),
            ServiceError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                ApiError::server_error()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid request body.")
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        ApiError::new(StatusCode::BAD_REQUEST, "Invalid query string.")
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityData {
    pub availability: Availability,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running",
        timestamp: Utc::now(),
    })
}

/// `POST /api/contact`
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<ContactCreated> {
    let Json(request) = payload?;
    let contact = state.contact_service.submit_contact(request).await?;

    Ok(ApiResponse::ok(
        Some("Message sent successfully."),
        Some(ContactCreated { id: contact.id }),
    ))
}

/// `POST /api/booking`
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> ApiResult<Booking> {
    let Json(request) = payload?;
    let booking = state.booking_service.create_booking(request).await?;

    Ok(ApiResponse::ok(Some("Booking confirmed."), Some(booking)))
}

/// `GET /api/availability?checkIn=&checkOut=`
pub async fn check_availability(
    State(state): State<AppState>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> ApiResult<AvailabilityData> {
    let Query(query) = query?;
    let availability = state.booking_service.check_availability(query).await?;

    Ok(ApiResponse::ok(None, Some(AvailabilityData { availability })))
}

/// `POST /api/newsletter`
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<NewsletterRequest>, JsonRejection>,
) -> ApiResult<()> {
    let Json(request) = payload?;
    let outcome = state.newsletter_service.subscribe(request).await?;

    if outcome == SubscribeOutcome::AlreadySubscribed {
        tracing::debug!("Repeat newsletter signup acknowledged");
    }
    Ok(ApiResponse::ok(Some("Successfully subscribed!"), None))
}

/// `GET /api/booking/{reference}`
pub async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> ApiResult<Booking> {
    let booking = state.booking_service.get_booking(&reference).await?;

    Ok(ApiResponse::ok(None, Some(booking)))
}

/// `GET /metrics`
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;
    use crate::error::StoreError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = ServiceError::from(ValidationError::InvalidRoomType("x".into())).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid room type.");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = ServiceError::NotFound("booking BK-ZZZZZZ".into()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Booking not found.");
    }

    #[test]
    fn test_storage_error_hides_detail() {
        let err: ApiError =
            ServiceError::Storage(StoreError::TaskJoin("worker panicked".into())).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Server error.");
    }

    #[test]
    fn test_envelope_omits_empty_fields() {
        let Json(body) = ApiResponse::<()>::ok(Some("Successfully subscribed!"), None);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": true, "message": "Successfully subscribed!"})
        );
    }
}
