use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDetails, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, services::ArticleSlugService},
        favorite::FavoriteRepository,
        tag::TagRepository,
        user::{User, UserDirectory, UserId, Username},
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) favorite_repo: Arc<dyn FavoriteRepository>,
    pub(super) user_directory: Arc<dyn UserDirectory>,
    pub(super) slug_service: Arc<ArticleSlugService>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        user_directory: Arc<dyn UserDirectory>,
        slug_service: Arc<ArticleSlugService>,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
            favorite_repo,
            user_directory,
            slug_service,
        }
    }

    /// Join author, tags and favorite state onto an article for `viewer`.
    pub(super) async fn present(
        &self,
        viewer: Option<&User>,
        article: Article,
    ) -> ApplicationResult<ArticleDto> {
        let id = article.id;
        self.present_page(viewer, vec![article])
            .await?
            .pop()
            .ok_or_else(|| ApplicationError::infrastructure(format!("article {id} not presented")))
    }

    /// Same as `present` for a whole page, with one lookup per concern
    /// instead of one per article. Input order is preserved.
    pub(super) async fn present_page(
        &self,
        viewer: Option<&User>,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<ArticleId> = articles.iter().map(|article| article.id).collect();
        let mut author_ids: Vec<UserId> = articles.iter().map(|article| article.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<UserId, Username> = self
            .user_directory
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.username))
            .collect();

        let mut tags: HashMap<ArticleId, Vec<String>> = HashMap::new();
        for (article_id, tag) in self.tag_repo.list_for_articles(&ids).await? {
            tags.entry(article_id)
                .or_default()
                .push(tag.name.into_inner());
        }

        let counts = self.favorite_repo.count_for_articles(&ids).await?;
        let favorited = match viewer {
            Some(user) => self.favorite_repo.favorited_among(user.id, &ids).await?,
            None => HashSet::new(),
        };

        articles
            .into_iter()
            .map(|article| {
                let author = authors.get(&article.author_id).cloned().ok_or_else(|| {
                    ApplicationError::not_found(format!("user {} not found", article.author_id))
                })?;
                let details = ArticleDetails {
                    author,
                    tags: tags.remove(&article.id).unwrap_or_default(),
                    favorited: favorited.contains(&article.id),
                    favorites_count: counts.get(&article.id).copied().unwrap_or(0),
                };
                Ok(ArticleDto::from_parts(article, details))
            })
            .collect()
    }
}
