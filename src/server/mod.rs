//! Server application core modules.
//!
//! This module contains all server-side functionality for the stockroom service, including
//! HTTP routing, configuration, database access through repositories and the domain services
//! that manage suppliers, products and categories.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
