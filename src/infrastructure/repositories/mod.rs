// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_favorite;
mod postgres_tag;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_favorite::PostgresFavoriteRepository;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::{PostgresUserDirectory, hash_token};
