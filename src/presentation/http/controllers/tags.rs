use crate::application::queries::articles::ListTagsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<TagsResponse>> {
    let tags = state
        .services
        .article_queries
        .list_tags(ListTagsQuery::default())
        .await
        .into_http()?;

    Ok(Json(TagsResponse {
        tags: tags.into_iter().map(|tag| tag.name).collect(),
    }))
}
