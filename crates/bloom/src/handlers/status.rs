//! Status check handlers.
//!
//! Write-only audit records that clients post to prove they can reach the API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use bloom_core::content::{validate_status_check, CreateStatusCheckRequest, StatusCheck};

use crate::{handlers::AppError, state::AppState};

/// Record a status check (POST /api/status).
pub async fn create_status_check(
    State(state): State<AppState>,
    payload: Result<Json<CreateStatusCheckRequest>, JsonRejection>,
) -> Result<Json<StatusCheck>, AppError> {
    let Json(payload) = payload?;
    let check = payload.into_status_check();
    validate_status_check(&check)?;

    state.status_repo.create_status_check(&check).await?;

    tracing::info!(
        status_check_id = %check.id,
        client_name = %check.client_name,
        "Recorded status check"
    );

    Ok(Json(check))
}

/// List every status check, oldest first (GET /api/status).
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = state.status_repo.list_status_checks().await?;
    Ok(Json(checks))
}
