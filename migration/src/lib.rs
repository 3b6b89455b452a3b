pub use sea_orm_migration::prelude::*;

mod m20251101_000001_supplier;
mod m20251101_000002_product;
mod m20251101_000003_category;
mod m20251101_000004_product_category;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_supplier::Migration),
            Box::new(m20251101_000002_product::Migration),
            Box::new(m20251101_000003_category::Migration),
            Box::new(m20251101_000004_product_category::Migration),
        ]
    }
}
