//! API data transfer objects shared by the HTTP layer and services.

pub mod api;
pub mod category;
pub mod product;
pub mod supplier;
