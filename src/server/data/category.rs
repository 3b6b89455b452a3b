use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

/// Validated fields for inserting a category
#[derive(Clone, Debug, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn active_model(category: NewCategory) -> entity::category::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::category::ActiveModel {
            name: ActiveValue::Set(category.name),
            description: ActiveValue::Set(category.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }

    /// Creates a new category
    pub async fn create(&self, category: NewCategory) -> Result<entity::category::Model, DbErr> {
        Self::active_model(category).insert(self.db).await
    }

    /// Inserts many categories with a single statement
    pub async fn create_many(&self, categories: Vec<NewCategory>) -> Result<(), DbErr> {
        if categories.is_empty() {
            return Ok(());
        }

        entity::prelude::Category::insert_many(categories.into_iter().map(Self::active_model))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_id(&self, category_id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    /// Get a category along with every product linked to it
    pub async fn get_with_products(
        &self,
        category_id: i32,
    ) -> Result<Option<(entity::category::Model, Vec<entity::product::Model>)>, DbErr> {
        let category = entity::prelude::Category::find_by_id(category_id)
            .find_with_related(entity::prelude::Product)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(category.into_iter().next())
    }
}
