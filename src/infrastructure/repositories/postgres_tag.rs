// src/infrastructure/repositories/postgres_tag.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::{Tag, TagId, TagName, TagRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool};

#[derive(Clone)]
pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    id: i64,
    name: String,
}

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    article_id: i64,
    id: i64,
    name: String,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: TagName::new(row.name)?,
        })
    }
}

/// Get-or-create a tag on the caller's connection, normally an open
/// transaction.
///
/// The insert goes first and yields to a concurrent writer of the same name
/// through `ON CONFLICT DO NOTHING`; the follow-up select then sees that
/// writer's committed row. There is no window between an existence check
/// and the insert.
pub(super) async fn resolve_tag(conn: &mut PgConnection, name: &TagName) -> DomainResult<Tag> {
    let inserted = sqlx::query_as::<_, TagRow>(
        "INSERT INTO tags (name) VALUES ($1)
         ON CONFLICT (name) DO NOTHING
         RETURNING id, name",
    )
    .bind(name.as_str())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    if let Some(row) = inserted {
        tracing::info!(tag = %name, "created tag");
        return Tag::try_from(row);
    }

    let row = sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags WHERE name = $1")
        .bind(name.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    Tag::try_from(row)
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn list(&self, article: Option<ArticleId>) -> DomainResult<Vec<Tag>> {
        let rows = match article {
            Some(article_id) => {
                sqlx::query_as::<_, TagRow>(
                    "SELECT t.id, t.name FROM tags t
                     JOIN article_tags at ON at.tag_id = t.id
                     WHERE at.article_id = $1
                     ORDER BY t.name",
                )
                .bind(i64::from(article_id))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, TagRow>("SELECT id, name FROM tags ORDER BY name")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn list_for_articles(
        &self,
        articles: &[ArticleId],
    ) -> DomainResult<Vec<(ArticleId, Tag)>> {
        let ids: Vec<i64> = articles.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, ArticleTagRow>(
            "SELECT at.article_id, t.id, t.name FROM article_tags at
             JOIN tags t ON t.id = at.tag_id
             WHERE at.article_id = ANY($1)
             ORDER BY at.article_id, t.name",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                let article_id = ArticleId::new(row.article_id)?;
                let tag = Tag::try_from(TagRow {
                    id: row.id,
                    name: row.name,
                })?;
                Ok((article_id, tag))
            })
            .collect()
    }
}
