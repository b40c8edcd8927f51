use crate::domain::article::Article;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDto {
    pub username: String,
}

/// An article as presented to a particular viewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: u64,
    pub author: AuthorDto,
}

/// Per-viewer facts joined onto an [`Article`] when presenting it.
#[derive(Debug, Clone)]
pub struct ArticleDetails {
    pub author: Username,
    pub tags: Vec<String>,
    pub favorited: bool,
    pub favorites_count: u64,
}

impl ArticleDto {
    pub fn from_parts(article: Article, details: ArticleDetails) -> Self {
        Self {
            id: article.id.into(),
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            description: article.description.into_inner(),
            body: article.body.into_inner(),
            tag_list: details.tags,
            created_at: article.created_at,
            favorited: details.favorited,
            favorites_count: details.favorites_count,
            author: AuthorDto {
                username: details.author.into_inner(),
            },
        }
    }
}
