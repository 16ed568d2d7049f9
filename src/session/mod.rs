use axum::Router;
use serde::{Deserialize, Serialize};

use crate::{
    error::DomainError,
    orders::repo_types::Order,
    state::AppState,
    users::repo_types::{User, UserRole},
};

mod action;
mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod view;

pub use action::{apply, Action};

/// Dashboard sub-view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Home,
    CreateOrder,
    MyOrders,
    MyDeliveries,
}

/// The one variable the screen router dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Register,
    Login { role: UserRole },
    Main { tab: Tab },
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Register => "register",
            Screen::Login { .. } => "login",
            Screen::Main { .. } => "main",
        }
    }
}

/// Everything one client sees: its own users, orders, active identity and
/// current screen. Sessions share nothing with each other.
#[derive(Debug, Clone)]
pub struct Session {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub current_user: Option<User>,
    pub screen: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            orders: Vec::new(),
            current_user: None,
            screen: Screen::Welcome,
        }
    }
}

impl Session {
    pub fn active_user(&self) -> Result<&User, DomainError> {
        self.current_user.as_ref().ok_or(DomainError::NoActiveUser)
    }
}

pub fn router() -> Router<AppState> {
    handlers::session_routes()
}
