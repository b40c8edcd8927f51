// src/application/ports/health.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Liveness probe for the persistence engine.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> ApplicationResult<()>;
}
