//! Factory functions for generating mock inventory models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests.

use chrono::Utc;

/// Create a mock supplier model with standard test contact details.
pub fn mock_supplier_model(id: i32, name: &str) -> entity::supplier::Model {
    let now = Utc::now().naive_utc();
    entity::supplier::Model {
        id,
        name: name.to_string(),
        contact: "Test Contact".to_string(),
        email: "contact@example.com".to_string(),
        phone: "000-000-0000".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock product model owned by `supplier_id`.
///
/// Stock is 10 units at a price of 100.0.
pub fn mock_product_model(id: i32, name: &str, supplier_id: i32) -> entity::product::Model {
    let now = Utc::now().naive_utc();
    entity::product::Model {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        quantity_in_stock: 10,
        price: 100.0,
        supplier_id,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock category model.
pub fn mock_category_model(id: i32, name: &str) -> entity::category::Model {
    let now = Utc::now().naive_utc();
    entity::category::Model {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        created_at: now,
        updated_at: now,
    }
}
