//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, along with their conversions into the API DTOs returned
//! by the HTTP layer.

use crate::model::{
    category::CategoryDto,
    product::{ProductDto, ProductWithCategoriesDto},
    supplier::{SupplierDto, SupplierWithProductsDto},
};

/// Type alias for the supplier database model.
///
/// # Fields (from `entity::supplier::Model`)
/// - `id` - Primary key
/// - `name`, `contact`, `email`, `phone` - Supplier details
/// - `created_at` / `updated_at` - Record timestamps
pub type SupplierModel = entity::supplier::Model;

/// Type alias for the product database model.
///
/// # Fields (from `entity::product::Model`)
/// - `id` - Primary key
/// - `name`, `description` - Product details
/// - `quantity_in_stock` - Units available
/// - `price` - Unit price
/// - `supplier_id` - Foreign key to the owning supplier
/// - `created_at` / `updated_at` - Record timestamps
pub type ProductModel = entity::product::Model;

/// Type alias for the category database model.
pub type CategoryModel = entity::category::Model;

impl From<SupplierModel> for SupplierDto {
    fn from(supplier: SupplierModel) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            contact: supplier.contact,
            email: supplier.email,
            phone: supplier.phone,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}

impl From<ProductModel> for ProductDto {
    fn from(product: ProductModel) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            quantity_in_stock: product.quantity_in_stock,
            price: product.price,
            supplier_id: product.supplier_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<CategoryModel> for CategoryDto {
    fn from(category: CategoryModel) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl ProductWithCategoriesDto {
    /// Combines a product with its loaded categories.
    pub fn from_models(product: ProductModel, categories: Vec<CategoryModel>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            quantity_in_stock: product.quantity_in_stock,
            price: product.price,
            supplier_id: product.supplier_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
            categories: categories.into_iter().map(CategoryDto::from).collect(),
        }
    }
}

impl SupplierWithProductsDto {
    /// Combines a supplier with its already assembled products.
    pub fn from_model(supplier: SupplierModel, products: Vec<ProductWithCategoriesDto>) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            contact: supplier.contact,
            email: supplier.email,
            phone: supplier.phone,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
            products,
        }
    }
}
