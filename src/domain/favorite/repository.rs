// src/domain/favorite/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Storage for (user, article) favorite pairs. A row exists exactly while
/// the user favorites the article.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn exists(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool>;

    /// Insert the pair. Inserting an existing pair is a no-op.
    async fn insert(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()>;

    async fn delete(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()>;

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64>;

    /// Favorite counts for a page of articles. Articles nobody favorites are
    /// absent from the map.
    async fn count_for_articles(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, u64>>;

    /// The subset of `article_ids` that `user_id` favorites.
    async fn favorited_among(
        &self,
        user_id: UserId,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashSet<ArticleId>>;
}
