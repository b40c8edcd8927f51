use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleCriteria, ArticleFilter},
        user::{User, UserId, Username},
    },
};

/// Listing by identifiers.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    /// `Some(vec![])` matches nothing; `None` leaves authorship unrestricted.
    pub author_ids: Option<Vec<i64>>,
    pub favorited_by: Option<i64>,
    /// Normalized before matching, so `"Dragons"` finds articles tagged `dragons`.
    pub tag: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Listing by usernames, as received from a query string.
#[derive(Debug, Clone, Default)]
pub struct BrowseArticlesQuery {
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        viewer: Option<&User>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let filter = self.compose_filter(query);
        if filter.is_unsatisfiable() {
            return Ok(Vec::new());
        }

        let articles = self.read_repo.list(&filter).await?;
        self.present_page(viewer, articles).await
    }

    /// Resolve usernames through the user directory, then list. An unknown
    /// author yields an empty author set and an unknown favoriting user
    /// yields nothing.
    pub async fn browse_articles(
        &self,
        viewer: Option<&User>,
        query: BrowseArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let author_ids = match query.author {
            Some(name) => Some(
                self.lookup_user_id(&name)
                    .await?
                    .into_iter()
                    .map(i64::from)
                    .collect(),
            ),
            None => None,
        };

        let favorited_by = match query.favorited {
            Some(name) => match self.lookup_user_id(&name).await? {
                Some(id) => Some(i64::from(id)),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        self.list_articles(
            viewer,
            ListArticlesQuery {
                author_ids,
                favorited_by,
                tag: query.tag,
                limit: query.limit,
                offset: query.offset,
            },
        )
        .await
    }

    async fn lookup_user_id(&self, name: &str) -> ApplicationResult<Option<UserId>> {
        let Ok(username) = Username::new(name) else {
            return Ok(None);
        };
        Ok(self
            .user_directory
            .find_by_username(&username)
            .await?
            .map(|user| user.id))
    }

    /// Identifiers that cannot exist drop out of the criteria; a tag with no
    /// alphanumeric content or an impossible favoriting user makes the whole
    /// filter unsatisfiable.
    fn compose_filter(&self, query: ListArticlesQuery) -> ArticleFilter {
        let ListArticlesQuery {
            author_ids,
            favorited_by,
            tag,
            limit,
            offset,
        } = query;

        let author_ids = author_ids.map(|ids| {
            ids.into_iter()
                .filter_map(|id| UserId::new(id).ok())
                .collect::<Vec<_>>()
        });

        let favorited_by = match favorited_by.map(UserId::new) {
            Some(Ok(id)) => Some(id),
            Some(Err(_)) => return ArticleFilter::nothing(),
            None => None,
        };

        let tag = match tag {
            Some(raw) => match self.slug_service.make_tag_name(&raw) {
                Some(name) => Some(name),
                None => return ArticleFilter::nothing(),
            },
            None => None,
        };

        ArticleFilter::compose(ArticleCriteria {
            author_ids,
            favorited_by,
            tag,
            limit,
            offset,
        })
    }
}
