//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// mock fixtures. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_inventory_tables: bool,

    // Database fixtures to insert
    suppliers: Vec<String>,
    categories: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every inventory table to the test database.
    ///
    /// Creates Supplier, Product, Category and ProductCategory in dependency order,
    /// including their foreign keys.
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_inventory_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use stockroom_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), stockroom_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Supplier)
    ///     .with_table(Product)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock supplier with the given name during `build()`.
    pub fn with_mock_supplier(mut self, name: impl Into<String>) -> Self {
        self.suppliers.push(name.into());
        self
    }

    /// Insert a mock category with the given name during `build()`.
    pub fn with_mock_category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    /// Build the test context.
    ///
    /// Creates the tables first, then inserts the queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_inventory_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Supplier),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::Category),
                schema.create_table_from_entity(entity::prelude::ProductCategory),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for name in self.suppliers {
            setup.inventory().insert_mock_supplier(&name).await?;
        }

        for name in self.categories {
            setup.inventory().insert_mock_category(&name).await?;
        }

        Ok(setup)
    }
}
