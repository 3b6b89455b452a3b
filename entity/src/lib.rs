//! SeaORM entities for the stockroom schema.

pub mod prelude;

pub mod category;
pub mod product;
pub mod product_category;
pub mod supplier;
