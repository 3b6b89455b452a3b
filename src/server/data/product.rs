use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder,
};

/// Validated fields for inserting a product
#[derive(Clone, Debug, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub quantity_in_stock: i32,
    pub price: f64,
    pub supplier_id: i32,
}

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn active_model(product: NewProduct) -> entity::product::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::product::ActiveModel {
            name: ActiveValue::Set(product.name),
            description: ActiveValue::Set(product.description),
            quantity_in_stock: ActiveValue::Set(product.quantity_in_stock),
            price: ActiveValue::Set(product.price),
            supplier_id: ActiveValue::Set(product.supplier_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }

    /// Creates a new product
    ///
    /// # Notes
    /// - `supplier_id` must exist in the supplier table due to foreign key constraint
    pub async fn create(&self, product: NewProduct) -> Result<entity::product::Model, DbErr> {
        Self::active_model(product).insert(self.db).await
    }

    /// Inserts many products with a single statement
    pub async fn create_many(&self, products: Vec<NewProduct>) -> Result<(), DbErr> {
        if products.is_empty() {
            return Ok(());
        }

        entity::prelude::Product::insert_many(products.into_iter().map(Self::active_model))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_id(&self, product_id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await
    }

    /// Get a product along with every category it is linked to
    pub async fn get_with_categories(
        &self,
        product_id: i32,
    ) -> Result<Option<(entity::product::Model, Vec<entity::category::Model>)>, DbErr> {
        let product = entity::prelude::Product::find_by_id(product_id)
            .find_with_related(entity::prelude::Category)
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await?;

        Ok(product.into_iter().next())
    }

    /// Batch loads the products of each supplier
    ///
    /// The outer vector lines up with `suppliers`.
    pub async fn load_for_suppliers(
        &self,
        suppliers: &[entity::supplier::Model],
    ) -> Result<Vec<Vec<entity::product::Model>>, DbErr> {
        suppliers
            .load_many(
                entity::prelude::Product::find().order_by_asc(entity::product::Column::Id),
                self.db,
            )
            .await
    }

    /// Batch loads the categories of each product through the join table
    ///
    /// The outer vector lines up with `products`.
    pub async fn load_categories(
        &self,
        products: &[entity::product::Model],
    ) -> Result<Vec<Vec<entity::category::Model>>, DbErr> {
        products
            .load_many_to_many(
                entity::prelude::Category::find().order_by_asc(entity::category::Column::Id),
                entity::prelude::ProductCategory,
                self.db,
            )
            .await
    }

    /// Deletes every product belonging to a supplier
    ///
    /// Join rows linking the deleted products to categories are removed by the
    /// database through their cascading foreign keys.
    pub async fn delete_by_supplier_id(&self, supplier_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Product::delete_many()
            .filter(entity::product::Column::SupplierId.eq(supplier_id))
            .exec(self.db)
            .await
    }
}
