//! HTTP error mapping

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use groups_core::{DomainError, ErrorKind};

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Payload failed field checks; maps field name to message
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    /// Body or path could not be parsed
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                (field.to_string(), message)
            })
            .collect();
        ApiError::Validation(fields)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::AlreadyExists => StatusCode::CONFLICT,
                ErrorKind::AlreadyInactive | ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) | ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Domain(e) => match e.kind() {
                ErrorKind::NotFound => "NOT_FOUND",
                ErrorKind::AlreadyExists => "ALREADY_EXISTS",
                ErrorKind::AlreadyInactive => "ALREADY_INACTIVE",
                ErrorKind::InvalidInput => "INVALID_INPUT",
                ErrorKind::Unexpected => "UNEXPECTED",
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match self {
            ApiError::Validation(fields) => {
                tracing::warn!("Validation failed: {:?}", fields);
                ApiResponse::<()>::error_with_fields(code, "Validation failed", Some(fields))
            }
            ApiError::InvalidInput(msg) => {
                tracing::warn!("Invalid input: {}", msg);
                ApiResponse::error(code, &msg)
            }
            ApiError::Domain(e) if status.is_server_error() => {
                tracing::error!("Unexpected error: {}", e);
                ApiResponse::error(code, &format!("An unexpected error occurred: {}", e))
            }
            ApiError::Domain(e) => {
                tracing::warn!("Request rejected: {}", e);
                ApiResponse::error(code, &e.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}
