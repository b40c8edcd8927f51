// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use quill_core::application::commands::articles::CreateArticleCommand;
use quill_core::application::dto::ArticleDto;
use quill_core::application::services::ApplicationServices;
use quill_core::domain::user::User;
use quill_core::infrastructure::util::DefaultSlugGenerator;
use quill_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{InMemoryStore, SteppingClock};

pub const JAKE_TOKEN: &str = "jake-token";
pub const ANNA_TOKEN: &str = "anna-token";

/// Wire the application services over one shared in-memory store.
pub fn build_services(store: &Arc<InMemoryStore>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(SteppingClock::default()),
        Arc::new(DefaultSlugGenerator),
    ))
}

pub fn make_test_router(store: &Arc<InMemoryStore>) -> axum::Router {
    let state = HttpState {
        services: build_services(store),
    };
    build_router(
        state,
        &["http://localhost:3000".to_string()],
        Duration::from_secs(5),
    )
}

/// A store with two users: jake (id 1) and anna (id 2), each with a token.
pub fn seeded_store() -> (Arc<InMemoryStore>, User, User) {
    let store = Arc::new(InMemoryStore::new());
    let jake = store.add_user(1, "jake", Some(JAKE_TOKEN));
    let anna = store.add_user(2, "anna", Some(ANNA_TOKEN));
    (store, jake, anna)
}

pub async fn create_article(
    services: &ApplicationServices,
    author: &User,
    title: &str,
    tags: &[&str],
) -> ArticleDto {
    let command = CreateArticleCommand::builder()
        .author_id(i64::from(author.id))
        .title(title)
        .description("about it")
        .body("body text")
        .tags(tags.iter().copied())
        .build()
        .expect("valid command");

    services
        .article_commands
        .create_article(command)
        .await
        .expect("article created")
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an error JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
