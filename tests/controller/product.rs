use axum::{extract::State, http::StatusCode, response::IntoResponse};
use stockroom::{
    model::product::{CreateProductRequest, NewProductDto},
    server::controller::{
        extract::{JsonBody, PathParams},
        product::{assign_category, create_product},
    },
};

use super::*;

/// Expect 200 with the created product under `newProduct`
#[tokio::test]
async fn create_returns_new_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_mock_supplier("TechSupplies")
        .build()
        .await?;

    let result = create_product(
        State(test.into_app_state()),
        JsonBody(CreateProductRequest {
            new_product: NewProductDto {
                name: Some("Laptop".to_string()),
                description: Some("High-performance laptop".to_string()),
                quantity_in_stock: Some(50),
                price: Some(120099.0),
                supplier_id: Some(1),
            },
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["newProduct"]["name"], "Laptop");
    assert_eq!(body["newProduct"]["quantityInStock"], 50);
    assert_eq!(body["newProduct"]["supplierId"], 1);

    Ok(())
}

/// Expect 409 when the referenced supplier does not exist
#[tokio::test]
async fn create_for_nonexistent_supplier_returns_409() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = create_product(
        State(test.into_app_state()),
        JsonBody(CreateProductRequest {
            new_product: NewProductDto {
                name: Some("Laptop".to_string()),
                price: Some(1.0),
                supplier_id: Some(42),
                ..Default::default()
            },
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with message and the product's categories
#[tokio::test]
async fn assign_returns_product_with_categories() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_inventory_tables().build().await?;
    let (_, product) = test
        .inventory()
        .insert_mock_supplier_with_product("TechSupplies", "Laptop")
        .await?;
    let category = test.inventory().insert_mock_category("Electronics").await?;

    let result = assign_category(
        State(test.into_app_state()),
        PathParams((product.id, category.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Product assigned to category successfully");
    assert_eq!(body["product"]["name"], "Laptop");
    assert_eq!(body["product"]["categories"][0]["name"], "Electronics");

    Ok(())
}

/// Expect 404 when the category does not exist
#[tokio::test]
async fn assign_to_nonexistent_category_returns_404() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_inventory_tables().build().await?;
    let (_, product) = test
        .inventory()
        .insert_mock_supplier_with_product("TechSupplies", "Laptop")
        .await?;

    let result = assign_category(State(test.into_app_state()), PathParams((product.id, 99))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Product or category not found");

    Ok(())
}
