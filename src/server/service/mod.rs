//! Business logic services.
//!
//! Each service wraps one domain area and coordinates the repositories it needs. The
//! database connection is injected through the constructor; multi-step writes open their
//! own transaction.

pub mod category;
pub mod product;
pub mod seed;
pub mod supplier;

use crate::server::error::inventory::InventoryError;

/// Unwraps a required request field or reports which one is missing.
fn required<T>(value: Option<T>, field: &'static str) -> Result<T, InventoryError> {
    value.ok_or(InventoryError::MissingField(field))
}
