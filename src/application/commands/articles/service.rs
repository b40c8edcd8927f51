// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        favorite::FavoriteRepository,
        user::UserDirectory,
    },
};

pub struct ArticleCommandService {
    pub(super) user_directory: Arc<dyn UserDirectory>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) favorite_repo: Arc<dyn FavoriteRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        user_directory: Arc<dyn UserDirectory>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        slug_service: Arc<ArticleSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_directory,
            write_repo,
            read_repo,
            favorite_repo,
            slug_service,
            clock,
        }
    }
}
