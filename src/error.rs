use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::session::view::Page;

/// Failures of a session action. The state is never modified when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Nombre inválido")]
    InvalidName,
    #[error("Teléfono inválido")]
    InvalidPhone,
    #[error("No hay ningún usuario activo")]
    NoActiveUser,
    #[error("La acción {action} no está disponible en la pantalla {screen}")]
    ActionUnavailable {
        action: &'static str,
        screen: &'static str,
    },
    #[error("Solo los clientes pueden crear pedidos")]
    ClientsOnly,
    #[error("Solo los repartidores pueden asignarse pedidos")]
    CouriersOnly,
    #[error("Usuario {0} no encontrado")]
    UserNotFound(String),
    #[error("Pedido {0} no encontrado")]
    OrderNotFound(String),
    #[error("El pedido {0} ya no está pendiente")]
    OrderNotPending(String),
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A rejected action, with the view the session is still showing.
    #[error("{error}")]
    Domain { error: DomainError, view: Box<Page> },
    #[error("missing x-session-id header")]
    MissingSession,
    #[error("invalid x-session-id header")]
    InvalidSession,
    #[error("session not found")]
    SessionNotFound,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<Box<Page>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain { error, .. } => match error {
                DomainError::InvalidName | DomainError::InvalidPhone => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                DomainError::NoActiveUser => StatusCode::UNAUTHORIZED,
                DomainError::ActionUnavailable { .. } | DomainError::OrderNotPending(_) => {
                    StatusCode::CONFLICT
                }
                DomainError::ClientsOnly | DomainError::CouriersOnly => StatusCode::FORBIDDEN,
                DomainError::UserNotFound(_) | DomainError::OrderNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
            },
            ApiError::MissingSession | ApiError::InvalidSession => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let view = match self {
            ApiError::Domain { view, .. } => Some(view),
            _ => None,
        };
        warn!(%status, %error, "request rejected");
        (status, Json(ErrorBody { error, view })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn domain(error: DomainError) -> ApiError {
        ApiError::Domain {
            error,
            view: Box::new(Session::default().render()),
        }
    }

    #[test]
    fn validation_failures_are_unprocessable() {
        assert_eq!(
            domain(DomainError::InvalidPhone).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            domain(DomainError::InvalidName).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn role_guards_are_forbidden() {
        assert_eq!(domain(DomainError::CouriersOnly).status(), StatusCode::FORBIDDEN);
        assert_eq!(domain(DomainError::ClientsOnly).status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_identity_is_unauthorized() {
        assert_eq!(domain(DomainError::NoActiveUser).status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn message_is_the_inline_text() {
        assert_eq!(domain(DomainError::InvalidName).to_string(), "Nombre inválido");
        assert_eq!(ApiError::SessionNotFound.status(), StatusCode::NOT_FOUND);
    }
}
