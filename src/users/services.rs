use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use tracing::{info, warn};

use crate::{
    error::DomainError,
    ids::generate_id,
    users::repo_types::{NewUser, User, UserRole},
};

lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[\p{L} ]*\p{L}[\p{L} ]*$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9]{9}$").unwrap();
}

/// Letters and spaces only, with at least one letter.
pub(crate) fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub(crate) fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Checks the registration form; name is checked before phone.
pub fn validate(form: &NewUser) -> Result<(), DomainError> {
    if !is_valid_name(&form.name) {
        warn!(name = %form.name, "invalid name");
        return Err(DomainError::InvalidName);
    }
    if !is_valid_phone(&form.phone) {
        warn!("invalid phone");
        return Err(DomainError::InvalidPhone);
    }
    Ok(())
}

/// Validates and appends a new user, returning a copy of it.
pub fn register<R: Rng + ?Sized>(
    users: &mut Vec<User>,
    form: NewUser,
    rng: &mut R,
) -> Result<User, DomainError> {
    validate(&form)?;

    let user = User {
        id: generate_id(rng, "U"),
        name: form.name,
        phone: form.phone,
        neighborhood: form.neighborhood,
        role: form.role,
    };
    users.push(user.clone());

    info!(user_id = %user.id, role = %user.role, neighborhood = %user.neighborhood, "user registered");
    Ok(user)
}

/// Session actor selection. There is no credential check.
pub fn select_user(users: &[User], role: UserRole, user_id: &str) -> Result<User, DomainError> {
    match User::find_by_id_and_role(users, user_id, role) {
        Some(user) => {
            info!(user_id = %user.id, role = %role, "user selected");
            Ok(user.clone())
        }
        None => {
            warn!(user_id, role = %role, "login unknown user");
            Err(DomainError::UserNotFound(user_id.to_string()))
        }
    }
}
