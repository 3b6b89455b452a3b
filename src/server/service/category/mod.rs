//! Category service layer.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        category::{CategoryDto, NewCategoryDto},
        product::ProductDto,
    },
    server::{
        data::category::{CategoryRepository, NewCategory},
        error::{inventory::InventoryError, Error},
        service::required,
    },
};

/// Service for managing categories.
pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new instance of CategoryService.
    ///
    /// Constructs a service for managing categories.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `CategoryService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a category. `name` is required, `description` defaults to an empty string.
    pub async fn create_category(&self, category: NewCategoryDto) -> Result<CategoryDto, Error> {
        let new_category = NewCategory {
            name: required(category.name, "name")?,
            description: category.description.unwrap_or_default(),
        };

        let category = CategoryRepository::new(self.db).create(new_category).await?;

        tracing::debug!(category_id = %category.id, "Created category");

        Ok(category.into())
    }

    /// Products linked to a category, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<ProductDto>)` - Linked products, empty if the category has none
    /// - `Err(Error::InventoryError(CategoryNotFound))` - No category with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_products(&self, category_id: i32) -> Result<Vec<ProductDto>, Error> {
        let Some((_, products)) = CategoryRepository::new(self.db)
            .get_with_products(category_id)
            .await?
        else {
            return Err(InventoryError::CategoryNotFound(category_id).into());
        };

        Ok(products.into_iter().map(ProductDto::from).collect())
    }
}
