use thiserror::Error;

use crate::server::error::ErrorKind;

/// Failures raised by the supplier, product and category operations.
///
/// The display text is returned to API clients as-is.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Supplier not found")]
    SupplierNotFound(i32),
    #[error("Category not found")]
    CategoryNotFound(i32),
    #[error("Product or category not found")]
    ProductOrCategoryNotFound { product_id: i32, category_id: i32 },
    /// Product references a supplier ID with no supplier row
    #[error("Supplier {0} does not exist")]
    SupplierReferenceMissing(i32),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SupplierNotFound(_)
            | Self::CategoryNotFound(_)
            | Self::ProductOrCategoryNotFound { .. } => ErrorKind::NotFound,
            Self::SupplierReferenceMissing(_) => ErrorKind::Conflict,
            Self::MissingField(_) => ErrorKind::InvalidInput,
        }
    }
}
