use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use model::Trainer;
use roster::Roster;
use serde::Deserialize;

use crate::error::ApiError;

pub(crate) fn routes(roster: Roster) -> Router {
    Router::new()
        .route(
            "/api/v1/trainer",
            get(list).post(create).delete(remove).put(update),
        )
        .with_state(roster)
}

async fn list(State(roster): State<Roster>) -> Result<impl IntoResponse, ApiError> {
    let trainers = roster.list().await?;
    // An empty roster renders as `null`, which existing clients expect.
    Ok(Json((!trainers.is_empty()).then_some(trainers)))
}

async fn create(
    State(roster): State<Roster>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let trainer: Trainer = serde_json::from_str(&body)?;
    roster.create(trainer.clone()).await?;
    Ok((StatusCode::CREATED, Json(trainer)))
}

async fn remove(State(roster): State<Roster>, body: String) -> Result<StatusCode, ApiError> {
    let trainer: Trainer = serde_json::from_str(&body)?;
    roster.delete(&trainer).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct UpdateRequest {
    original: Trainer,
    replacement: Trainer,
}

async fn update(State(roster): State<Roster>, body: String) -> Result<StatusCode, ApiError> {
    let request: UpdateRequest = serde_json::from_str(&body)?;
    roster.update(&request.original, request.replacement).await?;
    Ok(StatusCode::OK)
}
