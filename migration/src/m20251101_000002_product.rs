use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_supplier::Supplier;

static IDX_PRODUCT_SUPPLIER_ID: &str = "idx-product-supplier_id";
static FK_PRODUCT_SUPPLIER_ID: &str = "fk-product-supplier_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the same migration runs on SQLite,
        // which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(string(Product::Description))
                    .col(integer(Product::QuantityInStock))
                    .col(double(Product::Price))
                    .col(integer(Product::SupplierId))
                    .col(timestamp(Product::CreatedAt))
                    .col(timestamp(Product::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_SUPPLIER_ID)
                            .from(Product::Table, Product::SupplierId)
                            .to(Supplier::Table, Supplier::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_SUPPLIER_ID)
                    .table(Product::Table)
                    .col(Product::SupplierId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_SUPPLIER_ID)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    Description,
    QuantityInStock,
    Price,
    SupplierId,
    CreatedAt,
    UpdatedAt,
}
