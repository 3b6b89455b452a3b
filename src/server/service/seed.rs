//! Destructive database reset with a small demo inventory.

use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        category::{CategoryRepository, NewCategory},
        product::{NewProduct, ProductRepository},
        supplier::{NewSupplier, SupplierRepository},
    },
    error::Error,
};

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of SeedService.
    ///
    /// Constructs a service for resetting the database with demo inventory.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `SeedService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Drops every table, re-runs all migrations, then inserts the demo data.
    ///
    /// Two suppliers, one product each and two categories. No product is linked to a
    /// category.
    pub async fn seed(&self) -> Result<(), Error> {
        Migrator::fresh(self.db).await?;

        let txn = self.db.begin().await?;

        let supplier_repo = SupplierRepository::new(&txn);
        supplier_repo
            .create_many(vec![
                NewSupplier {
                    name: "TechSupplies".to_string(),
                    contact: "John Doe".to_string(),
                    email: "contact@techsupplies.com".to_string(),
                    phone: "123-456-7890".to_string(),
                },
                NewSupplier {
                    name: "HomeGoods Co.".to_string(),
                    contact: "Jane Smith".to_string(),
                    email: "contact@homegoodsco.com".to_string(),
                    phone: "987-654-3210".to_string(),
                },
            ])
            .await?;

        let suppliers = supplier_repo.get_all().await?;
        let supplier_id = |name: &str| {
            suppliers
                .iter()
                .find(|supplier| supplier.name == name)
                .map(|supplier| supplier.id)
                .ok_or_else(|| Error::InternalError(format!("seeded supplier {name} missing")))
        };

        ProductRepository::new(&txn)
            .create_many(vec![
                NewProduct {
                    name: "Laptop".to_string(),
                    description: "High-performance laptop".to_string(),
                    quantity_in_stock: 50,
                    price: 120099.0,
                    supplier_id: supplier_id("TechSupplies")?,
                },
                NewProduct {
                    name: "Coffee Maker".to_string(),
                    description: "12-cup coffee maker".to_string(),
                    quantity_in_stock: 20,
                    price: 45000.0,
                    supplier_id: supplier_id("HomeGoods Co.")?,
                },
            ])
            .await?;

        CategoryRepository::new(&txn)
            .create_many(vec![
                NewCategory {
                    name: "Electronics".to_string(),
                    description: "Devices and gadgets".to_string(),
                },
                NewCategory {
                    name: "Kitchen Appliances".to_string(),
                    description: "Essential home appliances for kitchen".to_string(),
                },
            ])
            .await?;

        txn.commit().await?;

        tracing::info!("Database seeded");

        Ok(())
    }
}
