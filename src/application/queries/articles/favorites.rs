use super::ArticleQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleId, user::UserId},
};

impl ArticleQueryService {
    pub async fn is_favorite(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> ApplicationResult<bool> {
        Ok(self.favorite_repo.exists(user_id, article_id).await?)
    }

    /// Number of users favoriting the article. Unknown articles count zero.
    pub async fn favorites_count(&self, article_id: ArticleId) -> ApplicationResult<u64> {
        Ok(self.favorite_repo.count_for_article(article_id).await?)
    }
}
