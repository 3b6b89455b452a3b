use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_product::Product, m20251101_000003_category::Category};

static PK_PRODUCT_CATEGORY: &str = "pk-product_category";
static IDX_PRODUCT_CATEGORY_CATEGORY_ID: &str = "idx-product_category-category_id";
static FK_PRODUCT_CATEGORY_PRODUCT_ID: &str = "fk-product_category-product_id";
static FK_PRODUCT_CATEGORY_CATEGORY_ID: &str = "fk-product_category-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductCategory::Table)
                    .if_not_exists()
                    .col(integer(ProductCategory::ProductId))
                    .col(integer(ProductCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .name(PK_PRODUCT_CATEGORY)
                            .col(ProductCategory::ProductId)
                            .col(ProductCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_CATEGORY_PRODUCT_ID)
                            .from(ProductCategory::Table, ProductCategory::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_CATEGORY_CATEGORY_ID)
                            .from(ProductCategory::Table, ProductCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_CATEGORY_CATEGORY_ID)
                    .table(ProductCategory::Table)
                    .col(ProductCategory::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_CATEGORY_CATEGORY_ID)
                    .table(ProductCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ProductCategory {
    Table,
    ProductId,
    CategoryId,
}
