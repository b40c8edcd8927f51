// src/infrastructure/repositories/postgres_favorite.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::favorite::FavoriteRepository;
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::{HashMap, HashSet};

#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn exists(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = $1 AND article_id = $2)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)
             ON CONFLICT (user_id, article_id) DO NOTHING",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user_id))
            .bind(i64::from(article_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM favorites WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn count_for_articles(
        &self,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashMap<ArticleId, u64>> {
        let ids: Vec<i64> = article_ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT article_id, COUNT(1) FROM favorites
             WHERE article_id = ANY($1)
             GROUP BY article_id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|(id, count)| Ok((ArticleId::new(id)?, count.max(0) as u64)))
            .collect()
    }

    async fn favorited_among(
        &self,
        user_id: UserId,
        article_ids: &[ArticleId],
    ) -> DomainResult<HashSet<ArticleId>> {
        let ids: Vec<i64> = article_ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_scalar::<_, i64>(
            "SELECT article_id FROM favorites WHERE user_id = $1 AND article_id = ANY($2)",
        )
        .bind(i64::from(user_id))
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleId::new).collect()
    }
}
