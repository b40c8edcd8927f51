// src/domain/tag/repository.rs
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::tag::entity::Tag;
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Every tag, or only those attached to `article`, ordered by name.
    async fn list(&self, article: Option<ArticleId>) -> DomainResult<Vec<Tag>>;

    /// Tags attached to any of `articles`, paired with the article, ordered
    /// by name within each article.
    async fn list_for_articles(
        &self,
        articles: &[ArticleId],
    ) -> DomainResult<Vec<(ArticleId, Tag)>>;
}
