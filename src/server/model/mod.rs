//! Server application models and type definitions.
//!
//! This module contains the application state shared with HTTP handlers and the database
//! model type aliases with their conversions into API DTOs.

pub mod app;
pub mod db;
