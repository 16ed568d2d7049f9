use crate::users::repo_types::{User, UserRole};

impl User {
    /// Users of one role, in registration order.
    pub fn list_by_role(users: &[User], role: UserRole) -> impl Iterator<Item = &User> {
        users.iter().filter(move |u| u.role == role)
    }

    /// First user (registration order) with this id and role.
    pub fn find_by_id_and_role<'a>(users: &'a [User], id: &str, role: UserRole) -> Option<&'a User> {
        Self::list_by_role(users, role).find(|u| u.id == id)
    }
}
