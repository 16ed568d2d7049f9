use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{view::Page, Tab};

/// Response body for a freshly opened session.
#[derive(Debug, Serialize)]
pub struct OpenSessionResponse {
    pub session_id: Uuid,
    pub view: Page,
}

/// Request body for switching dashboard tabs.
#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: Tab,
}
