// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, tags};
use crate::presentation::http::error::{HttpResult, IntoHttpResult, panic_response};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

pub fn build_router(
    state: HttpState,
    allowed_origins: &[String],
    request_timeout: Duration,
) -> Router {
    let routes = Router::new()
        .route("/healthcheck", get(healthcheck))
        .route(
            "/api/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/articles/{slug}", get(articles::get_article_by_slug))
        .route(
            "/api/articles/{slug}/favorite",
            post(articles::favorite_article).delete(articles::unfavorite_article),
        )
        .route("/api/tags", get(tags::list_tags));

    with_middleware(routes, allowed_origins, request_timeout).layer(Extension(state))
}

fn with_middleware(
    router: Router,
    allowed_origins: &[String],
    request_timeout: Duration,
) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(cors)
}

pub async fn healthcheck(Extension(state): Extension<HttpState>) -> HttpResult<Json<Value>> {
    state.services.check_store().await.into_http()?;
    Ok(Json(json!({})))
}
