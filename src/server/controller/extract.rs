//! Request extractors that reject through [`Error`], answering 400 with the API's
//! `{ "error": ... }` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Typed path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParams<T>(pub T);
