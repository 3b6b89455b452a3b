//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /seed_db` - Reset the database and insert demo inventory
/// - `POST /suppliers/new` - Create a supplier
/// - `POST /suppliers/{id}/update` - Update fields of a supplier
/// - `POST /suppliers/delete` - Delete a supplier and its products
/// - `GET /suppliers` - All suppliers with nested products and categories
/// - `POST /products/new` - Create a product
/// - `POST /products/{product_id}/assignCategory/{category_id}` - Link a product to a category
/// - `POST /categories/new` - Create a category
/// - `GET /categories/{id}/products` - Products in a category
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`, Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Stockroom", description = "Stockroom inventory API"), tags(
        (name = controller::supplier::SUPPLIER_TAG, description = "Supplier API routes"),
        (name = controller::product::PRODUCT_TAG, description = "Product API routes"),
        (name = controller::category::CATEGORY_TAG, description = "Category API routes"),
        (name = controller::seed::SEED_TAG, description = "Database seeding"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::seed::seed_db))
        .routes(routes!(controller::supplier::create_supplier))
        .routes(routes!(controller::supplier::update_supplier))
        .routes(routes!(controller::supplier::delete_supplier))
        .routes(routes!(controller::supplier::get_suppliers))
        .routes(routes!(controller::product::create_product))
        .routes(routes!(controller::product::assign_category))
        .routes(routes!(controller::category::create_category))
        .routes(routes!(controller::category::get_category_products))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
