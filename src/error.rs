// src/error.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

use crate::api::stripe_client::StripeError;

/// Failure taxonomy for every route. Each variant maps to a stable `error`
/// kind in the response body so clients and tests can tell them apart.
#[derive(Debug)]
pub enum ApiError {
    MalformedId(String),
    NotFound(String),
    Validation(String),
    Store(mongodb::error::Error),
    Payment(StripeError),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MalformedId(_) => "malformed_identifier",
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation(_) => "validation",
            ApiError::Store(_) | ApiError::Payment(_) => "upstream_unavailable",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedId(raw) => write!(f, "malformed document id: {raw}"),
            ApiError::NotFound(what) => write!(f, "{what} not found"),
            ApiError::Validation(msg) => write!(f, "{msg}"),
            ApiError::Store(e) => write!(f, "store error: {e}"),
            ApiError::Payment(e) => write!(f, "payment provider error: {e}"),
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(value: mongodb::error::Error) -> Self {
        Self::Store(value)
    }
}

impl From<StripeError> for ApiError {
    fn from(value: StripeError) -> Self {
        Self::Payment(value)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedId(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Payment(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self, ApiError::Store(_) | ApiError::Payment(_)) {
            log::error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }))
    }
}
