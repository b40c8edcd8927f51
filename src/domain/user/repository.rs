// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::{UserId, Username}};
use async_trait::async_trait;

/// Read-only view of the user directory. Account management lives elsewhere.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Unknown ids are skipped; order is unspecified.
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    /// Resolve a raw API token to its owner.
    async fn find_by_token(&self, token: &str) -> DomainResult<Option<User>>;
}
