use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::ApiError,
    session::{extractors::SessionId, handlers::dispatch, view::Page, Action},
    state::AppState,
    users::{
        dto::{LoginRequest, LoginRoleRequest, RegisterRequest},
        repo_types::Neighborhood,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/login/role", post(choose_login_role))
        .route("/login", post(login))
}

pub fn neighborhood_routes() -> Router<AppState> {
    Router::new().route("/neighborhoods", get(list_neighborhoods))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::Register(payload.into()))
}

#[instrument(skip(state))]
pub async fn choose_login_role(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(payload): Json<LoginRoleRequest>,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::ChooseLoginRole(payload.role))
}

#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Page>, ApiError> {
    dispatch(
        &state,
        session_id,
        Action::SelectUser {
            user_id: payload.user_id,
        },
    )
}

pub async fn list_neighborhoods() -> Json<Vec<Neighborhood>> {
    Json(Neighborhood::ALL.to_vec())
}
