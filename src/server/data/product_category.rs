use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct ProductCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductCategoryRepository<'a, C> {
    /// Creates a new instance of [`ProductCategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the link between a product and a category if it exists
    pub async fn get(
        &self,
        product_id: i32,
        category_id: i32,
    ) -> Result<Option<entity::product_category::Model>, DbErr> {
        entity::prelude::ProductCategory::find_by_id((product_id, category_id))
            .one(self.db)
            .await
    }

    /// Links a product to a category unless the link already exists
    ///
    /// Uses `ON CONFLICT DO NOTHING` on the composite key, so concurrent calls for the
    /// same pair both succeed and leave a single row.
    ///
    /// # Returns
    /// - `Ok(true)` - A new link was inserted
    /// - `Ok(false)` - The pair was already linked
    /// - `Err(DbErr)` - Either ID does not exist (foreign key) or the query failed
    pub async fn link(&self, product_id: i32, category_id: i32) -> Result<bool, DbErr> {
        let link = entity::product_category::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            category_id: ActiveValue::Set(category_id),
        };

        let rows_inserted = entity::prelude::ProductCategory::insert(link)
            .on_conflict(
                OnConflict::columns([
                    entity::product_category::Column::ProductId,
                    entity::product_category::Column::CategoryId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(rows_inserted > 0)
    }
}
