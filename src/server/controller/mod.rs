//! HTTP controller endpoints for the stockroom web API.
//!
//! This module contains Axum handlers for suppliers, products, categories and database
//! seeding. Controllers extract path and body parameters, call the matching service and
//! return JSON under a stable top-level key. They use utoipa for OpenAPI documentation.

pub mod category;
pub mod extract;
pub mod product;
pub mod seed;
pub mod supplier;
