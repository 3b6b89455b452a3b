//! Supplier service layer.
//!
//! Creating, updating and deleting suppliers, plus the full supplier -> product ->
//! category projection.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        product::ProductWithCategoriesDto,
        supplier::{NewSupplierDto, SupplierDto, SupplierPatchDto, SupplierWithProductsDto},
    },
    server::{
        data::{
            product::ProductRepository,
            supplier::{NewSupplier, SupplierPatch, SupplierRepository},
        },
        error::{inventory::InventoryError, Error},
        model::db::ProductModel,
        service::required,
    },
};

/// Service for managing suppliers and the products they own.
pub struct SupplierService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupplierService<'a> {
    /// Creates a new instance of SupplierService.
    ///
    /// Constructs a service for managing suppliers and their products.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `SupplierService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a supplier.
    ///
    /// `name` is required; `contact`, `email` and `phone` default to an empty string.
    /// Email addresses are not checked for uniqueness.
    ///
    /// # Returns
    /// - `Ok(SupplierDto)` - The stored supplier
    /// - `Err(Error::InventoryError(MissingField))` - `name` was not provided
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_supplier(&self, supplier: NewSupplierDto) -> Result<SupplierDto, Error> {
        let new_supplier = NewSupplier {
            name: required(supplier.name, "name")?,
            contact: supplier.contact.unwrap_or_default(),
            email: supplier.email.unwrap_or_default(),
            phone: supplier.phone.unwrap_or_default(),
        };

        let supplier = SupplierRepository::new(self.db).create(new_supplier).await?;

        tracing::debug!(supplier_id = %supplier.id, "Created supplier");

        Ok(supplier.into())
    }

    /// Replaces the fields present in `patch`, leaving the others untouched.
    ///
    /// The read and the write run in one transaction.
    ///
    /// # Returns
    /// - `Ok(SupplierDto)` - The supplier after the update
    /// - `Err(Error::InventoryError(SupplierNotFound))` - No supplier with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_supplier(
        &self,
        supplier_id: i32,
        patch: SupplierPatchDto,
    ) -> Result<SupplierDto, Error> {
        let patch = SupplierPatch {
            name: patch.name,
            contact: patch.contact,
            email: patch.email,
            phone: patch.phone,
        };

        let txn = self.db.begin().await?;

        let Some(supplier) = SupplierRepository::new(&txn)
            .update(supplier_id, patch)
            .await?
        else {
            return Err(InventoryError::SupplierNotFound(supplier_id).into());
        };

        txn.commit().await?;

        tracing::debug!(supplier_id = %supplier.id, "Updated supplier");

        Ok(supplier.into())
    }

    /// Deletes a supplier together with all of its products.
    ///
    /// Runs in a single transaction: either the products and the supplier are all
    /// removed, or nothing is. Category links of the removed products cascade.
    ///
    /// # Returns
    /// - `Ok(())` - Supplier and products deleted
    /// - `Err(Error::InventoryError(SupplierNotFound))` - No supplier with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction was rolled back
    pub async fn delete_supplier(&self, supplier_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let supplier_repo = SupplierRepository::new(&txn);
        if supplier_repo.get_by_id(supplier_id).await?.is_none() {
            return Err(InventoryError::SupplierNotFound(supplier_id).into());
        }

        let products = ProductRepository::new(&txn)
            .delete_by_supplier_id(supplier_id)
            .await?;
        supplier_repo.delete(supplier_id).await?;

        txn.commit().await?;

        tracing::debug!(
            supplier_id = %supplier_id,
            products_deleted = %products.rows_affected,
            "Deleted supplier"
        );

        Ok(())
    }

    /// Every supplier with its products, each product with its categories.
    ///
    /// Uses three queries in total regardless of row counts: suppliers, their products,
    /// then the categories of all those products through the join table.
    pub async fn get_all_with_associations(&self) -> Result<Vec<SupplierWithProductsDto>, Error> {
        let supplier_repo = SupplierRepository::new(self.db);
        let product_repo = ProductRepository::new(self.db);

        let suppliers = supplier_repo.get_all().await?;
        let products_per_supplier = product_repo.load_for_suppliers(&suppliers).await?;

        let all_products: Vec<ProductModel> =
            products_per_supplier.iter().flatten().cloned().collect();
        let mut categories_per_product = product_repo
            .load_categories(&all_products)
            .await?
            .into_iter();

        let suppliers = suppliers
            .into_iter()
            .zip(products_per_supplier)
            .map(|(supplier, products)| {
                let products = products
                    .into_iter()
                    .map(|product| {
                        let categories = categories_per_product.next().unwrap_or_default();
                        ProductWithCategoriesDto::from_models(product, categories)
                    })
                    .collect();

                SupplierWithProductsDto::from_model(supplier, products)
            })
            .collect();

        Ok(suppliers)
    }
}
