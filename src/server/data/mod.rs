//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per table.
//! Each is generic over [`sea_orm::ConnectionTrait`] so it runs against either the shared
//! connection pool or an open transaction.

pub mod category;
pub mod product;
pub mod product_category;
pub mod supplier;
