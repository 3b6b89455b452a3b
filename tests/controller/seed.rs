use axum::{extract::State, http::StatusCode, response::IntoResponse};
use stockroom::server::controller::seed::seed_db;

use super::*;

/// Expect 200 with a plain text confirmation
#[tokio::test]
async fn returns_success_text() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = seed_db(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(body, b"Database seeded successfully");

    Ok(())
}
