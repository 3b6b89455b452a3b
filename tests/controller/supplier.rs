use axum::{extract::State, http::StatusCode, response::IntoResponse};
use stockroom::{
    model::supplier::{
        CreateSupplierRequest, DeleteSupplierRequest, NewSupplierDto, SupplierPatchDto,
        UpdateSupplierRequest,
    },
    server::controller::{
        extract::{JsonBody, PathParams},
        supplier::{
            create_supplier, delete_supplier, get_suppliers, update_supplier,
        },
    },
};

use super::*;

/// Expect 200 with the created supplier under `newSupplier`
#[tokio::test]
async fn create_returns_new_supplier() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = create_supplier(
        State(test.into_app_state()),
        JsonBody(CreateSupplierRequest {
            new_supplier: NewSupplierDto {
                name: Some("TechSupplies".to_string()),
                contact: Some("John Doe".to_string()),
                email: Some("contact@techsupplies.com".to_string()),
                phone: Some("123-456-7890".to_string()),
            },
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["newSupplier"]["name"], "TechSupplies");
    assert_eq!(body["newSupplier"]["email"], "contact@techsupplies.com");

    Ok(())
}

/// Expect 400 when the supplier name is missing
#[tokio::test]
async fn create_without_name_returns_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = create_supplier(
        State(test.into_app_state()),
        JsonBody(CreateSupplierRequest {
            new_supplier: NewSupplierDto::default(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Missing required field: name");

    Ok(())
}

/// Expect 200 with the patched supplier under `updatedSupplier`
#[tokio::test]
async fn update_returns_updated_supplier() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_mock_supplier("TechSupplies")
        .build()
        .await?;

    let result = update_supplier(
        State(test.into_app_state()),
        PathParams(1),
        JsonBody(UpdateSupplierRequest {
            update_supplier: SupplierPatchDto {
                email: Some("x".to_string()),
                ..Default::default()
            },
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["updatedSupplier"]["email"], "x");
    assert_eq!(body["updatedSupplier"]["name"], "TechSupplies");

    Ok(())
}

/// Expect 404 when updating a supplier that does not exist
#[tokio::test]
async fn update_nonexistent_returns_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = update_supplier(
        State(test.into_app_state()),
        PathParams(1),
        JsonBody(UpdateSupplierRequest {
            update_supplier: SupplierPatchDto::default(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Supplier not found");

    Ok(())
}

/// Expect 200 with a confirmation message after deleting
#[tokio::test]
async fn delete_returns_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_mock_supplier("TechSupplies")
        .build()
        .await?;

    let result = delete_supplier(
        State(test.into_app_state()),
        JsonBody(DeleteSupplierRequest {
            supplier_id: Some(1),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Supplier deleted successfully");

    Ok(())
}

/// Expect 404 when deleting a supplier that does not exist
#[tokio::test]
async fn delete_nonexistent_returns_404() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = delete_supplier(
        State(test.into_app_state()),
        JsonBody(DeleteSupplierRequest {
            supplier_id: Some(1),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when the supplier ID is missing from the body
#[tokio::test]
async fn delete_without_id_returns_400() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = delete_supplier(
        State(test.into_app_state()),
        JsonBody(DeleteSupplierRequest::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 with nested products and categories under `suppliers`
#[tokio::test]
async fn get_suppliers_returns_nested_data() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_inventory_tables().build().await?;
    let (_, laptop) = test
        .inventory()
        .insert_mock_supplier_with_product("TechSupplies", "Laptop")
        .await?;
    let category = test.inventory().insert_mock_category("Electronics").await?;
    test.inventory()
        .insert_product_category(laptop.id, category.id)
        .await?;

    let result = get_suppliers(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["suppliers"][0]["name"], "TechSupplies");
    assert_eq!(body["suppliers"][0]["products"][0]["name"], "Laptop");
    assert_eq!(
        body["suppliers"][0]["products"][0]["categories"][0]["name"],
        "Electronics"
    );

    Ok(())
}

/// Expect 500 with a generic message when the tables are missing
#[tokio::test]
async fn get_suppliers_without_tables_returns_500() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_suppliers(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(resp).await;
    assert_eq!(body, br#"{"error":"Internal server error"}"#);

    Ok(())
}
