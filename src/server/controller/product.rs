use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        product::{AssignCategoryResponse, CreateProductRequest, CreateProductResponse},
    },
    server::{
        controller::extract::{JsonBody, PathParams},
        error::Error,
        model::app::AppState,
        service::product::ProductService,
    },
};

pub static PRODUCT_TAG: &str = "product";

/// Create a new product for an existing supplier
#[utoipa::path(
    post,
    path = "/products/new",
    tag = PRODUCT_TAG,
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = CreateProductResponse),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 409, description = "Supplier does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db);

    let new_product = product_service.create_product(payload.new_product).await?;

    Ok((StatusCode::OK, Json(CreateProductResponse { new_product })))
}

/// Assign a product to a category
///
/// Repeating the assignment is a no-op.
#[utoipa::path(
    post,
    path = "/products/{product_id}/assignCategory/{category_id}",
    tag = PRODUCT_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID"),
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Product assigned, returned with all its categories", body = AssignCategoryResponse),
        (status = 404, description = "Product or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_category(
    State(state): State<AppState>,
    PathParams((product_id, category_id)): PathParams<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db);

    let product = product_service
        .assign_category(product_id, category_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AssignCategoryResponse {
            message: "Product assigned to category successfully".to_string(),
            product,
        }),
    ))
}
