// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::articles::ArticleCommandService,
        error::ApplicationError,
        ports::{health::StoreHealth, time::Clock, util::SlugGenerator},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        favorite::FavoriteRepository,
        tag::TagRepository,
        user::{User, UserDirectory},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    user_directory: Arc<dyn UserDirectory>,
    store_health: Arc<dyn StoreHealth>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_directory: Arc<dyn UserDirectory>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        store_health: Arc<dyn StoreHealth>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(Arc::clone(&slugger)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&user_directory),
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&favorite_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&favorite_repo),
            Arc::clone(&user_directory),
            Arc::clone(&slug_service),
        ));

        Self {
            article_commands,
            article_queries,
            user_directory,
            store_health,
        }
    }

    /// Resolve a raw API token to its user.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<User> {
        self.user_directory
            .find_by_token(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid authentication token"))
    }

    pub async fn check_store(&self) -> ApplicationResult<()> {
        self.store_health.ping().await
    }
}
