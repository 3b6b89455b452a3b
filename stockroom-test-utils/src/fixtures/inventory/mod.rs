//! Inventory fixture utilities.
//!
//! Insert helpers for supplier, product and category rows plus factory functions for
//! building in-memory models.

pub mod data;
pub mod factory;

use crate::TestContext;

impl TestContext {
    pub fn inventory<'a>(&'a mut self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    pub setup: &'a mut TestContext,
}
