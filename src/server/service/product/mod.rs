//! Product service layer.
//!
//! Product creation and category assignment.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::product::{NewProductDto, ProductDto, ProductWithCategoriesDto},
    server::{
        data::{
            category::CategoryRepository,
            product::{NewProduct, ProductRepository},
            product_category::ProductCategoryRepository,
        },
        error::{inventory::InventoryError, Error},
        service::required,
    },
};

/// Service for managing products and their category links.
pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of ProductService.
    ///
    /// Constructs a service for creating products and assigning them to categories.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `ProductService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product owned by an existing supplier.
    ///
    /// `name`, `price` and `supplierId` are required. `description` defaults to an empty
    /// string and `quantityInStock` to 0.
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - The stored product
    /// - `Err(Error::InventoryError(MissingField))` - A required field was not provided
    /// - `Err(Error::InventoryError(SupplierReferenceMissing))` - `supplierId` matches no supplier
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_product(&self, product: NewProductDto) -> Result<ProductDto, Error> {
        let new_product = NewProduct {
            name: required(product.name, "name")?,
            description: product.description.unwrap_or_default(),
            quantity_in_stock: product.quantity_in_stock.unwrap_or_default(),
            price: required(product.price, "price")?,
            supplier_id: required(product.supplier_id, "supplierId")?,
        };
        let supplier_id = new_product.supplier_id;

        let product = ProductRepository::new(self.db)
            .create(new_product)
            .await
            .map_err(|err| map_supplier_reference(err, supplier_id))?;

        tracing::debug!(
            product_id = %product.id,
            supplier_id = %product.supplier_id,
            "Created product"
        );

        Ok(product.into())
    }

    /// Links a product to a category and returns the product with all its categories.
    ///
    /// Assigning an already linked pair succeeds without creating a duplicate link. The
    /// existence checks, the link and the re-read run in one transaction.
    ///
    /// # Returns
    /// - `Ok(ProductWithCategoriesDto)` - The product after the assignment
    /// - `Err(Error::InventoryError(ProductOrCategoryNotFound))` - Either side is missing,
    ///   nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn assign_category(
        &self,
        product_id: i32,
        category_id: i32,
    ) -> Result<ProductWithCategoriesDto, Error> {
        let not_found = InventoryError::ProductOrCategoryNotFound {
            product_id,
            category_id,
        };

        let txn = self.db.begin().await?;

        let product_repo = ProductRepository::new(&txn);
        let category_repo = CategoryRepository::new(&txn);

        if product_repo.get_by_id(product_id).await?.is_none()
            || category_repo.get_by_id(category_id).await?.is_none()
        {
            return Err(not_found.into());
        }

        let created = ProductCategoryRepository::new(&txn)
            .link(product_id, category_id)
            .await?;

        let Some((product, categories)) = product_repo.get_with_categories(product_id).await?
        else {
            return Err(not_found.into());
        };

        txn.commit().await?;

        tracing::debug!(
            product_id = %product_id,
            category_id = %category_id,
            created = %created,
            "Assigned product to category"
        );

        Ok(ProductWithCategoriesDto::from_models(product, categories))
    }
}

/// A foreign key failure on product insert can only come from the supplier reference.
fn map_supplier_reference(err: DbErr, supplier_id: i32) -> Error {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            InventoryError::SupplierReferenceMissing(supplier_id).into()
        }
        _ => err.into(),
    }
}
