use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supplier::Table)
                    .if_not_exists()
                    .col(pk_auto(Supplier::Id))
                    .col(string(Supplier::Name))
                    .col(string(Supplier::Contact))
                    .col(string(Supplier::Email))
                    .col(string(Supplier::Phone))
                    .col(timestamp(Supplier::CreatedAt))
                    .col(timestamp(Supplier::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Supplier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Supplier {
    Table,
    Id,
    Name,
    Contact,
    Email,
    Phone,
    CreatedAt,
    UpdatedAt,
}
