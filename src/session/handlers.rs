use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use super::{
    apply,
    dto::{OpenSessionResponse, TabRequest},
    extractors::{SessionId, SESSION_HEADER},
    view::Page,
    Action,
};
use crate::{error::ApiError, state::AppState};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/session",
            post(open_session).get(current_view).delete(close_session),
        )
        .route("/session/continue", post(continue_to_login))
        .route("/session/register", post(start_registration))
        .route("/session/back", post(back))
        .route("/session/logout", post(logout))
        .route("/session/tab", post(show_tab))
}

/// Applies one action to the caller's session and renders the next page.
///
/// A rejected action is reported together with the page the session is
/// still on.
pub(crate) fn dispatch(
    state: &AppState,
    session_id: Uuid,
    action: Action,
) -> Result<Json<Page>, ApiError> {
    let now = OffsetDateTime::now_utc();
    state
        .sessions
        .with_session(session_id, now, |session| {
            let mut rng = rand::thread_rng();
            apply(session, action, &mut rng, now).map_err(|error| ApiError::Domain {
                error,
                view: Box::new(session.render()),
            })
        })?
        .map(Json)
}

#[instrument(skip(state))]
pub async fn open_session(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let now = OffsetDateTime::now_utc();
    let session_id = state.sessions.open(now);
    let view = state
        .sessions
        .with_session(session_id, now, |session| session.render())?;

    Ok((
        StatusCode::CREATED,
        [(SESSION_HEADER, session_id.to_string())],
        Json(OpenSessionResponse { session_id, view }),
    ))
}

#[instrument(skip(state))]
pub async fn current_view(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Json<Page>, ApiError> {
    let view = state
        .sessions
        .with_session(session_id, OffsetDateTime::now_utc(), |session| session.render())?;
    Ok(Json(view))
}

#[instrument(skip(state))]
pub async fn close_session(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<StatusCode, ApiError> {
    if state.sessions.close(session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound)
    }
}

#[instrument(skip(state))]
pub async fn continue_to_login(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::Continue)
}

#[instrument(skip(state))]
pub async fn start_registration(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::StartRegistration)
}

#[instrument(skip(state))]
pub async fn back(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::Back)
}

#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::Logout)
}

#[instrument(skip(state, payload))]
pub async fn show_tab(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(payload): Json<TabRequest>,
) -> Result<Json<Page>, ApiError> {
    dispatch(&state, session_id, Action::ShowTab(payload.tab))
}
