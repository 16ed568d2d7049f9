use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use tracing::instrument;

use super::dto::CreateOrderRequest;
use crate::{
    error::ApiError,
    session::{extractors::SessionId, handlers::dispatch, view::Page, Action},
    state::AppState,
};

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/:id/claim", post(claim_order))
}

#[instrument(skip(state, payload))]
pub async fn create_order(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::CreateOrder { item: payload.item })
}

#[instrument(skip(state))]
pub async fn claim_order(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Path(id): Path<String>,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::ClaimOrder { order_id: id })
}
