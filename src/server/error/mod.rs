//! Error types for the stockroom server.
//!
//! Domain failures live in [`inventory::InventoryError`], configuration failures in
//! [`config::ConfigError`]. Both fold into [`Error`], which also wraps database and I/O
//! errors. Every error classifies into one [`ErrorKind`], which decides the HTTP status
//! returned by the `IntoResponse` implementation.

pub mod config;
pub mod inventory;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, inventory::InventoryError},
};

/// Closed set of error categories exposed to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced record does not exist (404)
    NotFound,
    /// The request conflicts with the stored state, e.g. a dangling foreign key (409)
    Conflict,
    /// The request is missing required input (400)
    InvalidInput,
    /// Infrastructure or programming failure (500)
    Internal,
}

impl ErrorKind {
    /// HTTP status code reported for this kind of error.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Main error type for the stockroom server.
///
/// Aggregates the domain-specific errors and external library errors into a single type,
/// using `thiserror`'s `#[from]` so the `?` operator converts automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Inventory domain error (missing records, missing input).
    #[error(transparent)]
    InventoryError(#[from] InventoryError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Internal error indicating a bug in stockroom's code.
    #[error("Internal error with stockroom's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Request body or path could not be extracted (bad JSON, wrong type, missing content type).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl Error {
    /// Classifies the error for the HTTP layer.
    ///
    /// Constraint violations reported by the database are treated as conflicts, every other
    /// database failure is internal.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InventoryError(err) => err.kind(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_))
                | Some(SqlErr::UniqueConstraintViolation(_)) => ErrorKind::Conflict,
                _ => ErrorKind::Internal,
            },
            Self::InvalidRequest(_) => ErrorKind::InvalidInput,
            Self::ConfigError(_) | Self::InternalError(_) | Self::IoError(_) => ErrorKind::Internal,
        }
    }

    /// Message sent to the client for non-internal errors.
    ///
    /// Constraint violations carry driver text, so they get a fixed message instead.
    fn client_message(&self) -> String {
        match self {
            Self::DbErr(_) => "Request conflicts with existing data".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Required input missing
/// - 404 Not Found - Supplier, product or category does not exist
/// - 409 Conflict - Store constraint violated
/// - 500 Internal Server Error - Everything else (logged, message withheld)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::Internal => InternalServerError(self).into_response(),
            kind => {
                tracing::debug!("{}", self);

                (
                    kind.status_code(),
                    Json(ErrorDto {
                        error: self.client_message(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
