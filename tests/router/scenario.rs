use axum::http::{Method, StatusCode};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;
use stockroom::server::router::routes;
use tower::ServiceExt;

use super::*;

/// Look up the ID of an entity by name in the `GET /suppliers` payload
fn find_id(items: &serde_json::Value, name: &str) -> i64 {
    items
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["name"] == name)
        .unwrap()["id"]
        .as_i64()
        .unwrap()
}

/// Expect Electronics to list exactly the Laptop after seeding and assigning it
#[tokio::test]
async fn seed_then_assign_laptop_to_electronics() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/seed_db"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"Database seeded successfully");

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/suppliers"))
        .await
        .unwrap();
    let suppliers = body_json(resp).await["suppliers"].clone();
    let tech_id = find_id(&suppliers, "TechSupplies");
    let tech = suppliers
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == tech_id)
        .unwrap();
    let laptop_id = find_id(&tech["products"], "Laptop");

    let electronics_id = entity::prelude::Category::find()
        .filter(entity::category::Column::Name.eq("Electronics"))
        .one(&test.db)
        .await?
        .unwrap()
        .id;

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/products/{laptop_id}/assignCategory/{electronics_id}"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request(
            Method::GET,
            &format!("/categories/{electronics_id}/products"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Laptop"]);

    Ok(())
}

/// Expect neither TechSupplies nor the Laptop to be listed after deleting the supplier
#[tokio::test]
async fn delete_tech_supplies_removes_its_products() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    app.clone()
        .oneshot(empty_request(Method::GET, "/seed_db"))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/suppliers"))
        .await
        .unwrap();
    let tech_id = find_id(&body_json(resp).await["suppliers"], "TechSupplies");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/suppliers/delete",
            json!({ "supplierId": tech_id }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["message"],
        "Supplier deleted successfully"
    );

    let resp = app
        .clone()
        .oneshot(empty_request(Method::GET, "/suppliers"))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let suppliers = body["suppliers"].as_array().unwrap();
    assert_eq!(suppliers.len(), 1);
    assert!(suppliers.iter().all(|s| s["name"] != "TechSupplies"));
    assert!(suppliers
        .iter()
        .flat_map(|s| s["products"].as_array().unwrap())
        .all(|p| p["name"] != "Laptop"));

    Ok(())
}

/// Expect the camelCase wrapped bodies to round trip through the router
#[tokio::test]
async fn create_supplier_product_and_category_over_http() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/suppliers/new",
            json!({ "newSupplier": { "name": "TechSupplies", "email": "contact@techsupplies.com" } }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let supplier_id = body_json(resp).await["newSupplier"]["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/products/new",
            json!({ "newProduct": { "name": "Laptop", "price": 1200.5, "supplierId": supplier_id } }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let product = body_json(resp).await["newProduct"].clone();
    assert_eq!(product["quantityInStock"], 0);
    assert_eq!(product["description"], "");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/categories/new",
            json!({ "newCategory": { "name": "Electronics" } }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/suppliers/{supplier_id}/update"),
            json!({ "updateSupplier": { "phone": "555-0100" } }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await["updatedSupplier"].clone();
    assert_eq!(updated["phone"], "555-0100");
    assert_eq!(updated["email"], "contact@techsupplies.com");

    Ok(())
}

/// Expect 400 when the request wrapper key is missing
#[tokio::test]
async fn missing_wrapper_returns_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(json_request(
            Method::POST,
            "/suppliers/new",
            json!({ "name": "TechSupplies" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["error"],
        "Missing required field: name"
    );

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/suppliers"].is_object());
    assert!(doc["paths"]["/products/{product_id}/assignCategory/{category_id}"].is_object());

    Ok(())
}
