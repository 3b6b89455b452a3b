//! Test fixture modules for database record creation.
//!
//! - `inventory` - Suppliers, products, categories and their links

pub mod inventory;
