//! Rendering directives returned by every session action.

use serde::Serialize;
use tracing::debug;

use super::{Screen, Session, Tab};
use crate::{
    orders::{repo_types::Order, services::can_claim},
    users::repo_types::{Neighborhood, User, UserRole},
};

const TITLE: &str = "BarriBox";
const SUBTITLE: &str = "Logística vecinal";
const NO_USERS_WARNING: &str = "No hay usuarios de este tipo";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// Transient inline message shown with a page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

/// Entry of the login selection list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginEntry {
    pub id: String,
    pub label: String, // "name (neighborhood)"
}

/// The active identity shown in the dashboard header.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub neighborhood: Neighborhood,
    pub role: UserRole,
}

impl From<&User> for PublicUser {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.clone(),
            name: u.name.clone(),
            neighborhood: u.neighborhood,
            role: u.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub order: Order,
    pub can_claim: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Feed { orders: Vec<FeedEntry> },
    CreateOrder { form_visible: bool },
    MyOrders { orders: Vec<Order> },
    MyDeliveries { orders: Vec<Order> },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum View {
    Welcome {
        title: &'static str,
        subtitle: &'static str,
    },
    Register {
        neighborhoods: Vec<Neighborhood>,
        roles: Vec<UserRole>,
    },
    Login {
        role: UserRole,
        users: Vec<LoginEntry>,
    },
    Main {
        user: PublicUser,
        tab: Tab,
        tabs: Vec<Tab>,
        panel: Panel,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Page {
    #[serde(flatten)]
    pub view: View,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl Page {
    fn new(view: View) -> Self {
        Self { view, notice: None }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

fn tabs_for(role: UserRole) -> Vec<Tab> {
    match role {
        UserRole::Client => vec![Tab::Home, Tab::CreateOrder, Tab::MyOrders],
        UserRole::Courier => vec![Tab::Home, Tab::CreateOrder, Tab::MyOrders, Tab::MyDeliveries],
    }
}

fn welcome() -> Page {
    Page::new(View::Welcome {
        title: TITLE,
        subtitle: SUBTITLE,
    })
}

impl Session {
    /// Renders the current screen. Pure; never mutates the session.
    pub fn render(&self) -> Page {
        debug!(screen = self.screen.name(), "render");
        match self.screen {
            Screen::Welcome => welcome(),
            Screen::Register => Page::new(View::Register {
                neighborhoods: Neighborhood::ALL.to_vec(),
                roles: UserRole::ALL.to_vec(),
            }),
            Screen::Login { role } => {
                let users: Vec<LoginEntry> = User::list_by_role(&self.users, role)
                    .map(|u| LoginEntry {
                        id: u.id.clone(),
                        label: format!("{} ({})", u.name, u.neighborhood),
                    })
                    .collect();
                let empty = users.is_empty();
                let page = Page::new(View::Login { role, users });
                if empty {
                    page.with_notice(Notice::warning(NO_USERS_WARNING))
                } else {
                    page
                }
            }
            Screen::Main { tab } => match &self.current_user {
                Some(user) => Page::new(View::Main {
                    user: PublicUser::from(user),
                    tab,
                    tabs: tabs_for(user.role),
                    panel: self.panel(user, tab),
                }),
                None => welcome(),
            },
        }
    }

    fn panel(&self, user: &User, tab: Tab) -> Panel {
        match tab {
            Tab::Home => Panel::Feed {
                orders: self
                    .orders
                    .iter()
                    .map(|o| FeedEntry {
                        order: o.clone(),
                        can_claim: can_claim(user, o),
                    })
                    .collect(),
            },
            Tab::CreateOrder => Panel::CreateOrder {
                form_visible: user.role == UserRole::Client,
            },
            Tab::MyOrders => Panel::MyOrders {
                orders: Order::list_by_client(&self.orders, &user.name)
                    .cloned()
                    .collect(),
            },
            Tab::MyDeliveries => Panel::MyDeliveries {
                orders: match user.role {
                    UserRole::Courier => Order::list_by_courier(&self.orders, &user.name)
                        .cloned()
                        .collect(),
                    UserRole::Client => Vec::new(),
                },
            },
        }
    }
}
