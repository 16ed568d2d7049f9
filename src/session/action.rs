use rand::Rng;
use time::OffsetDateTime;
use tracing::debug;

use super::{
    view::{Notice, Page},
    Screen, Session, Tab,
};
use crate::{
    error::DomainError,
    orders::services::{claim_order, create_order},
    users::{
        repo_types::{NewUser, UserRole},
        services::{register, select_user},
    },
};

/// One user interaction, as the screens would submit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Continue,
    StartRegistration,
    Back,
    Register(NewUser),
    ChooseLoginRole(UserRole),
    SelectUser { user_id: String },
    ShowTab(Tab),
    CreateOrder { item: String },
    ClaimOrder { order_id: String },
    Logout,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Continue => "continue",
            Action::StartRegistration => "start_registration",
            Action::Back => "back",
            Action::Register(_) => "register",
            Action::ChooseLoginRole(_) => "choose_login_role",
            Action::SelectUser { .. } => "select_user",
            Action::ShowTab(_) => "show_tab",
            Action::CreateOrder { .. } => "create_order",
            Action::ClaimOrder { .. } => "claim_order",
            Action::Logout => "logout",
        }
    }
}

/// Applies `action` to the session and returns the page to show next.
///
/// Each action is only accepted on the screen that offers it. On error the
/// session is left exactly as it was.
pub fn apply<R: Rng + ?Sized>(
    session: &mut Session,
    action: Action,
    rng: &mut R,
    now: OffsetDateTime,
) -> Result<Page, DomainError> {
    let screen = session.screen;
    debug!(action = action.name(), screen = screen.name(), "apply");

    let notice = match (screen, action) {
        (Screen::Welcome, Action::Continue) => {
            session.screen = Screen::Login {
                role: UserRole::Client,
            };
            None
        }
        (Screen::Welcome, Action::StartRegistration) => {
            session.screen = Screen::Register;
            None
        }
        (Screen::Register | Screen::Login { .. }, Action::Back) => {
            session.screen = Screen::Welcome;
            None
        }
        (Screen::Register, Action::Register(form)) => {
            let user = register(&mut session.users, form, rng)?;
            session.current_user = Some(user);
            session.screen = Screen::Main { tab: Tab::Home };
            None
        }
        (Screen::Login { .. }, Action::ChooseLoginRole(role)) => {
            session.screen = Screen::Login { role };
            None
        }
        (Screen::Login { role }, Action::SelectUser { user_id }) => {
            let user = select_user(&session.users, role, &user_id)?;
            session.current_user = Some(user);
            session.screen = Screen::Main { tab: Tab::Home };
            None
        }
        (Screen::Main { .. }, Action::ShowTab(tab)) => {
            session.active_user()?;
            session.screen = Screen::Main { tab };
            None
        }
        (Screen::Main { tab: Tab::CreateOrder }, Action::CreateOrder { item }) => {
            let client = session.active_user()?.clone();
            create_order(&mut session.orders, &client, item, rng, now)?;
            Some(Notice::success("Pedido creado"))
        }
        (Screen::Main { tab: Tab::Home }, Action::ClaimOrder { order_id }) => {
            let courier = session.active_user()?.clone();
            claim_order(&mut session.orders, &courier, &order_id)?;
            None
        }
        (Screen::Main { .. }, Action::Logout) => {
            session.current_user = None;
            session.screen = Screen::Welcome;
            None
        }
        (screen, action) => {
            return Err(DomainError::ActionUnavailable {
                action: action.name(),
                screen: screen.name(),
            })
        }
    };

    let page = session.render();
    Ok(match notice {
        Some(notice) => page.with_notice(notice),
        None => page,
    })
}
