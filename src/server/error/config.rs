use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures, reported before the server binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} must be set to start stockroom")]
    MissingEnvVar(String),
    #[error("Environment variable {var} has an unusable value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
