// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDetails, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleDescription, ArticleTitle, NewArticle},
        user::UserId,
    },
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreateArticleCommand {
    pub author_id: i64,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Option<Vec<String>>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    author_id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    body: Option<String>,
    tag_list: Option<Vec<String>>,
}

impl CreateArticleCommandBuilder {
    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_list = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            author_id: self.author_id.ok_or("author_id is required")?,
            title: self.title.ok_or("title is required")?,
            description: self.description.unwrap_or_default(),
            body: self.body.ok_or("body is required")?,
            tag_list: self.tag_list,
        })
    }
}

impl ArticleCommandService {
    /// Create an article together with its tag associations.
    ///
    /// The slug is derived from the author's username and the title and must
    /// not already be taken. Tags are normalized and de-duplicated before
    /// anything is written; labels with no alphanumeric content are skipped.
    /// The insert and every tag association commit together or not at all.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        if let Ok(payload) = serde_json::to_string(&command) {
            tracing::info!(target: "audit", input = %payload, "creating article");
        }

        let CreateArticleCommand {
            author_id,
            title,
            description,
            body,
            tag_list,
        } = command;

        let title = ArticleTitle::new(title)?;
        let body = ArticleBody::new(body)?;
        let author_id = UserId::new(author_id)?;

        let author = self
            .user_directory
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {author_id} not found")))?;

        let slug = self.slug_service.make_slug(&author.username, &title)?;
        if self.read_repo.slug_exists(&slug).await? {
            return Err(ApplicationError::already_exists(format!(
                "slug {slug} already exists. Please choose another title."
            )));
        }

        let mut new_article = NewArticle {
            author_id: author.id,
            slug,
            title,
            description: ArticleDescription::new(description),
            body,
            created_at: self.clock.now(),
            tags: Vec::new(),
        };
        for raw in tag_list.unwrap_or_default() {
            if let Some(tag) = self.slug_service.make_tag_name(&raw) {
                new_article.push_tag(tag);
            }
        }

        let mut tags: Vec<String> = new_article
            .tags
            .iter()
            .map(|tag| tag.as_str().to_owned())
            .collect();
        tags.sort();

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");

        Ok(ArticleDto::from_parts(
            created,
            ArticleDetails {
                author: author.username,
                tags,
                favorited: false,
                favorites_count: 0,
            },
        ))
    }
}
