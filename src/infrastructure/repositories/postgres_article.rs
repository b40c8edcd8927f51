// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, postgres_tag::resolve_tag};
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleFilter, ArticleId, ArticlePredicate,
    ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT_ARTICLES: &str =
    "SELECT id, author_id, slug, title, description, body, created_at FROM articles";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description),
            body: ArticleBody::new(row.body)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            slug,
            title,
            description,
            body,
            created_at,
            tags,
        } = article;

        // Dropping `tx` on any early return rolls the whole attempt back.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (author_id, slug, title, description, body, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, author_id, slug, title, description, body, created_at",
        )
        .bind(i64::from(author_id))
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let created = Article::try_from(row)?;

        for name in &tags {
            let tag = resolve_tag(&mut *tx, name).await?;

            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)
                 ON CONFLICT DO NOTHING",
            )
            .bind(i64::from(created.id))
            .bind(i64::from(tag.id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        Ok(created)
    }
}

impl PostgresArticleReadRepository {
    fn apply_predicates(builder: &mut QueryBuilder<'_, Postgres>, predicates: &[ArticlePredicate]) {
        for (index, predicate) in predicates.iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });

            match predicate {
                ArticlePredicate::Never => {
                    builder.push("FALSE");
                }
                ArticlePredicate::AuthorIn(ids) => {
                    let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
                    builder.push("author_id = ANY(");
                    builder.push_bind(ids);
                    builder.push(")");
                }
                ArticlePredicate::FavoritedBy(user_id) => {
                    builder.push("id IN (SELECT article_id FROM favorites WHERE user_id = ");
                    builder.push_bind(i64::from(*user_id));
                    builder.push(")");
                }
                ArticlePredicate::TaggedWith(tag) => {
                    builder.push(
                        "id IN (SELECT at.article_id FROM article_tags at \
                         JOIN tags t ON t.id = at.tag_id WHERE t.name = ",
                    );
                    builder.push_bind(tag.as_str().to_owned());
                    builder.push(")");
                }
            }
        }
    }

    fn build_list_query(filter: &ArticleFilter) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_ARTICLES);
        Self::apply_predicates(&mut builder, filter.predicates());
        builder.push(" ORDER BY created_at DESC, id DESC");

        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        if let Some(offset) = filter.offset {
            builder.push(" OFFSET ");
            builder.push_bind(i64::from(offset));
        }

        builder
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author_id, slug, title, description, body, created_at
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author_id, slug, title, description, body, created_at
             FROM articles WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<Vec<Article>> {
        let mut builder = Self::build_list_query(filter);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
