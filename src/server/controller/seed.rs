use axum::{extract::State, http::StatusCode, response::IntoResponse};
use dioxus_logger::tracing;

use crate::server::{model::app::AppState, service::seed::SeedService};

pub static SEED_TAG: &str = "seed";

/// Drop all data and reseed the database with demo inventory
///
/// Responds with plain text rather than JSON.
#[utoipa::path(
    get,
    path = "/seed_db",
    tag = SEED_TAG,
    responses(
        (status = 200, description = "Database seeded", body = String, content_type = "text/plain"),
        (status = 500, description = "Seeding failed", body = String, content_type = "text/plain")
    ),
)]
pub async fn seed_db(State(state): State<AppState>) -> impl IntoResponse {
    let seed_service = SeedService::new(&state.db);

    match seed_service.seed().await {
        Ok(()) => (StatusCode::OK, "Database seeded successfully"),
        Err(err) => {
            tracing::error!("Failed to seed database: {}", err);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while seeding the database",
            )
        }
    }
}
