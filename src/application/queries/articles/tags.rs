use super::ArticleQueryService;
use crate::{
    application::{dto::TagDto, error::ApplicationResult},
    domain::article::ArticleId,
};

#[derive(Debug, Clone, Default)]
pub struct ListTagsQuery {
    pub article_id: Option<i64>,
}

impl ArticleQueryService {
    /// Tags ordered by name; restricted to one article when `article_id` is set.
    pub async fn list_tags(&self, query: ListTagsQuery) -> ApplicationResult<Vec<TagDto>> {
        let article = query.article_id.map(ArticleId::new).transpose()?;
        let tags = self.tag_repo.list(article).await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
