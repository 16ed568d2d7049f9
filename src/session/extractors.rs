use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::ApiError;

pub const SESSION_HEADER: &str = "x-session-id";

/// Reads the `x-session-id` header, returning the session UUID.
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_HEADER)
            .ok_or(ApiError::MissingSession)?
            .to_str()
            .map_err(|_| ApiError::InvalidSession)?;

        let id = Uuid::parse_str(raw.trim()).map_err(|_| ApiError::InvalidSession)?;
        Ok(SessionId(id))
    }
}
