//! Inventory database insertion utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::inventory::{factory, InventoryFixtures},
};

impl<'a> InventoryFixtures<'a> {
    /// Insert a mock supplier into the database.
    ///
    /// # Returns
    /// - `Ok(entity::supplier::Model)` - The created supplier record
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the table is missing
    pub async fn insert_mock_supplier(
        &self,
        name: &str,
    ) -> Result<entity::supplier::Model, TestError> {
        let supplier = factory::mock_supplier_model(0, name);

        Ok(
            entity::prelude::Supplier::insert(entity::supplier::ActiveModel {
                name: ActiveValue::Set(supplier.name),
                contact: ActiveValue::Set(supplier.contact),
                email: ActiveValue::Set(supplier.email),
                phone: ActiveValue::Set(supplier.phone),
                created_at: ActiveValue::Set(supplier.created_at),
                updated_at: ActiveValue::Set(supplier.updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock product owned by `supplier_id`.
    ///
    /// The supplier must already exist due to the foreign key constraint.
    pub async fn insert_mock_product(
        &self,
        name: &str,
        supplier_id: i32,
    ) -> Result<entity::product::Model, TestError> {
        let product = factory::mock_product_model(0, name, supplier_id);

        Ok(
            entity::prelude::Product::insert(entity::product::ActiveModel {
                name: ActiveValue::Set(product.name),
                description: ActiveValue::Set(product.description),
                quantity_in_stock: ActiveValue::Set(product.quantity_in_stock),
                price: ActiveValue::Set(product.price),
                supplier_id: ActiveValue::Set(product.supplier_id),
                created_at: ActiveValue::Set(product.created_at),
                updated_at: ActiveValue::Set(product.updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock category into the database.
    pub async fn insert_mock_category(
        &self,
        name: &str,
    ) -> Result<entity::category::Model, TestError> {
        let category = factory::mock_category_model(0, name);

        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(category.name),
                description: ActiveValue::Set(category.description),
                created_at: ActiveValue::Set(category.created_at),
                updated_at: ActiveValue::Set(category.updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a supplier together with one product it owns.
    pub async fn insert_mock_supplier_with_product(
        &self,
        supplier_name: &str,
        product_name: &str,
    ) -> Result<(entity::supplier::Model, entity::product::Model), TestError> {
        let supplier = self.insert_mock_supplier(supplier_name).await?;
        let product = self.insert_mock_product(product_name, supplier.id).await?;

        Ok((supplier, product))
    }

    /// Link an existing product to an existing category.
    pub async fn insert_product_category(
        &self,
        product_id: i32,
        category_id: i32,
    ) -> Result<entity::product_category::Model, TestError> {
        Ok(entity::prelude::ProductCategory::insert(
            entity::product_category::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                category_id: ActiveValue::Set(category_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
