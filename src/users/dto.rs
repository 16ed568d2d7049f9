use serde::Deserialize;

use crate::users::repo_types::{Neighborhood, NewUser, UserRole};

/// Request body for the registration form.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub neighborhood: Neighborhood,
    pub role: UserRole,
}

impl From<RegisterRequest> for NewUser {
    fn from(r: RegisterRequest) -> Self {
        Self {
            name: r.name,
            phone: r.phone,
            neighborhood: r.neighborhood,
            role: r.role,
        }
    }
}

/// Request body for picking the login list's role filter.
#[derive(Debug, Deserialize)]
pub struct LoginRoleRequest {
    pub role: UserRole,
}

/// Request body for selecting a registered user.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_id: String,
}
