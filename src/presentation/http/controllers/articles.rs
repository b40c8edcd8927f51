// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, FavoriteArticleCommand},
    dto::ArticleDto,
    queries::articles::{BrowseArticlesQuery, GetArticleBySlugQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub favorited: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub article: NewArticlePayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticlePayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tag_list: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SingleArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleArticlesResponse {
    pub articles: Vec<ArticleDto>,
    pub articles_count: usize,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<MultipleArticlesResponse>> {
    let articles = state
        .services
        .article_queries
        .browse_articles(
            viewer.as_ref(),
            BrowseArticlesQuery {
                author: params.author,
                favorited: params.favorited,
                tag: params.tag,
                limit: Some(params.limit),
                offset: Some(params.offset),
            },
        )
        .await
        .into_http()?;

    Ok(Json(MultipleArticlesResponse {
        articles_count: articles.len(),
        articles,
    }))
}

pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(viewer): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<SingleArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_slug(viewer.as_ref(), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(|article| Json(SingleArticleResponse { article }))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<SingleArticleResponse>)> {
    let NewArticlePayload {
        title,
        description,
        body,
        tag_list,
    } = payload.article;

    let command = CreateArticleCommand {
        author_id: i64::from(user.id),
        title,
        description,
        body,
        tag_list,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(SingleArticleResponse { article })))
}

pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<SingleArticleResponse>> {
    let queries = &state.services.article_queries;
    let article = queries
        .get_article_by_slug(Some(&user), GetArticleBySlugQuery { slug: slug.clone() })
        .await
        .into_http()?;

    state
        .services
        .article_commands
        .favorite_article(FavoriteArticleCommand {
            user_id: i64::from(user.id),
            article_id: article.id,
        })
        .await
        .into_http()?;

    queries
        .get_article_by_slug(Some(&user), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(|article| Json(SingleArticleResponse { article }))
}

pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<SingleArticleResponse>> {
    let queries = &state.services.article_queries;
    let article = queries
        .get_article_by_slug(Some(&user), GetArticleBySlugQuery { slug: slug.clone() })
        .await
        .into_http()?;

    state
        .services
        .article_commands
        .unfavorite_article(FavoriteArticleCommand {
            user_id: i64::from(user.id),
            article_id: article.id,
        })
        .await
        .into_http()?;

    queries
        .get_article_by_slug(Some(&user), GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(|article| Json(SingleArticleResponse { article }))
}
