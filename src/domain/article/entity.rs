// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle,
};
use crate::domain::tag::TagName;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A persisted article. Articles are never edited or deleted once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: UserId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
}

/// Everything needed to create an article and its tag associations in one
/// unit of work.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: UserId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    /// Normalized and de-duplicated, in request order.
    pub tags: Vec<TagName>,
}

impl NewArticle {
    /// Append a tag unless an equal name is already present.
    pub fn push_tag(&mut self, tag: TagName) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }
}
