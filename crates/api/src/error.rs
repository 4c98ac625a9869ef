//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use checkout::CheckoutError;
use domain::DomainError;
use store::StoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Store error.
    Store(StoreError),
    /// Domain logic error.
    Domain(DomainError),
    /// Checkout or gifting error.
    Checkout(CheckoutError),
}

impl ApiError {
    /// Rejects a path or body id that is not a positive integer.
    pub fn invalid_id(entity: &str, raw: i64) -> Self {
        ApiError::BadRequest(format!("invalid {entity} id: {raw}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Store(err) => store_error_to_response(err),
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::Checkout(err) => checkout_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn store_error_to_response(err: StoreError) -> (StatusCode, String) {
    match &err {
        StoreError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        StoreError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, String) {
    match err {
        DomainError::Store(err) => store_error_to_response(err),
        DomainError::BookNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, String) {
    match err {
        CheckoutError::Domain(err) => domain_error_to_response(err),
        CheckoutError::Store(err) => store_error_to_response(err),
        CheckoutError::ItemsRequired | CheckoutError::InvalidBuyer(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::Checkout(err)
    }
}
