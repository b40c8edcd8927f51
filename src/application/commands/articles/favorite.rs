// src/application/commands/articles/favorite.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{article::ArticleId, user::UserId},
};

pub struct FavoriteArticleCommand {
    pub user_id: i64,
    pub article_id: i64,
}

impl ArticleCommandService {
    /// Mark the article as a favorite of the user. Already-favorited pairs
    /// return without writing.
    pub async fn favorite_article(&self, command: FavoriteArticleCommand) -> ApplicationResult<()> {
        let user_id = UserId::new(command.user_id)?;
        let article_id = ArticleId::new(command.article_id)?;
        tracing::info!(%user_id, %article_id, "favoriting article");

        if self.favorite_repo.exists(user_id, article_id).await? {
            return Ok(());
        }

        self.user_directory
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {user_id} not found")))?;
        self.read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {article_id} not found")))?;

        self.favorite_repo.insert(user_id, article_id).await?;
        Ok(())
    }

    /// Remove the favorite mark. Pairs that are not favorited return without
    /// writing.
    pub async fn unfavorite_article(
        &self,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<()> {
        let user_id = UserId::new(command.user_id)?;
        let article_id = ArticleId::new(command.article_id)?;
        tracing::info!(%user_id, %article_id, "unfavoriting article");

        if !self.favorite_repo.exists(user_id, article_id).await? {
            return Ok(());
        }

        self.favorite_repo.delete(user_id, article_id).await?;
        Ok(())
    }
}
