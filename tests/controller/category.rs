use axum::{extract::State, http::StatusCode, response::IntoResponse};
use stockroom::{
    model::category::{CreateCategoryRequest, NewCategoryDto},
    server::controller::{
        extract::{JsonBody, PathParams},
        category::{create_category, get_category_products},
    },
};

use super::*;

/// Expect 200 with the created category under `newCategory`
#[tokio::test]
async fn create_returns_new_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = create_category(
        State(test.into_app_state()),
        JsonBody(CreateCategoryRequest {
            new_category: NewCategoryDto {
                name: Some("Electronics".to_string()),
                description: Some("Devices and gadgets".to_string()),
            },
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["newCategory"]["name"], "Electronics");
    assert_eq!(body["newCategory"]["description"], "Devices and gadgets");

    Ok(())
}

/// Expect 200 with an empty `products` list for an unused category
#[tokio::test]
async fn products_of_unused_category_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_mock_category("Electronics")
        .build()
        .await?;

    let result = get_category_products(State(test.into_app_state()), PathParams(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["products"], serde_json::json!([]));

    Ok(())
}

/// Expect 404 when the category does not exist
#[tokio::test]
async fn products_of_nonexistent_category_returns_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = get_category_products(State(test.into_app_state()), PathParams(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Category not found");

    Ok(())
}
