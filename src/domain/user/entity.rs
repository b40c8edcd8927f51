// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};

/// A user as known to the user directory. Only the identity and the
/// username participate in article management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
}

impl User {
    pub fn new(id: UserId, username: Username) -> Self {
        Self { id, username }
    }
}
