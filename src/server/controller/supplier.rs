use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        supplier::{
            CreateSupplierRequest, CreateSupplierResponse, DeleteSupplierRequest,
            SuppliersResponse, UpdateSupplierRequest, UpdateSupplierResponse,
        },
    },
    server::{
        controller::extract::{JsonBody, PathParams},
        error::{inventory::InventoryError, Error},
        model::app::AppState,
        service::supplier::SupplierService,
    },
};

pub static SUPPLIER_TAG: &str = "supplier";

/// Create a new supplier
#[utoipa::path(
    post,
    path = "/suppliers/new",
    tag = SUPPLIER_TAG,
    request_body = CreateSupplierRequest,
    responses(
        (status = 200, description = "Supplier created", body = CreateSupplierResponse),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateSupplierRequest>,
) -> Result<impl IntoResponse, Error> {
    let supplier_service = SupplierService::new(&state.db);

    let new_supplier = supplier_service
        .create_supplier(payload.new_supplier)
        .await?;

    Ok((StatusCode::OK, Json(CreateSupplierResponse { new_supplier })))
}

/// Update the provided fields of a supplier
#[utoipa::path(
    post,
    path = "/suppliers/{id}/update",
    tag = SUPPLIER_TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    request_body = UpdateSupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = UpdateSupplierResponse),
        (status = 404, description = "Supplier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    PathParams(supplier_id): PathParams<i32>,
    JsonBody(payload): JsonBody<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, Error> {
    let supplier_service = SupplierService::new(&state.db);

    let updated_supplier = supplier_service
        .update_supplier(supplier_id, payload.update_supplier)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UpdateSupplierResponse { updated_supplier }),
    ))
}

/// Delete a supplier and every product it supplies
#[utoipa::path(
    post,
    path = "/suppliers/delete",
    tag = SUPPLIER_TAG,
    request_body = DeleteSupplierRequest,
    responses(
        (status = 200, description = "Supplier and its products deleted", body = MessageDto),
        (status = 400, description = "Supplier ID missing", body = ErrorDto),
        (status = 404, description = "Supplier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteSupplierRequest>,
) -> Result<impl IntoResponse, Error> {
    let supplier_service = SupplierService::new(&state.db);

    let supplier_id = payload
        .supplier_id
        .ok_or(InventoryError::MissingField("supplierId"))?;

    supplier_service.delete_supplier(supplier_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Supplier deleted successfully".to_string(),
        }),
    ))
}

/// Get every supplier with its products and their categories
#[utoipa::path(
    get,
    path = "/suppliers",
    tag = SUPPLIER_TAG,
    responses(
        (status = 200, description = "All suppliers with nested products and categories", body = SuppliersResponse),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suppliers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let supplier_service = SupplierService::new(&state.db);

    let suppliers = supplier_service.get_all_with_associations().await?;

    Ok((StatusCode::OK, Json(SuppliersResponse { suppliers })))
}
