use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        category::{CreateCategoryRequest, CreateCategoryResponse},
        product::ProductsResponse,
    },
    server::{
        controller::extract::{JsonBody, PathParams},
        error::Error,
        model::app::AppState,
        service::category::CategoryService,
    },
};

pub static CATEGORY_TAG: &str = "category";

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories/new",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = CreateCategoryResponse),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCategoryRequest>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    let new_category = category_service
        .create_category(payload.new_category)
        .await?;

    Ok((StatusCode::OK, Json(CreateCategoryResponse { new_category })))
}

/// Get every product assigned to a category
#[utoipa::path(
    get,
    path = "/categories/{id}/products",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Products in the category", body = ProductsResponse),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_products(
    State(state): State<AppState>,
    PathParams(category_id): PathParams<i32>,
) -> Result<impl IntoResponse, Error> {
    let category_service = CategoryService::new(&state.db);

    let products = category_service.get_products(category_id).await?;

    Ok((StatusCode::OK, Json(ProductsResponse { products })))
}
