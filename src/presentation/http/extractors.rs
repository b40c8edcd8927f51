// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, domain::user::User,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::error::HttpError;

const TOKEN_SCHEME: &str = "Token";
const INVALID_TOKEN: &str = "Invalid or missing authentication token";

#[derive(Debug, Clone)]
pub struct Authenticated(pub User);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<User>);

enum Credential {
    Absent,
    Malformed,
    Token(String),
}

fn read_credential(parts: &Parts) -> Credential {
    let Some(value) = parts.headers.get(AUTHORIZATION) else {
        return Credential::Absent;
    };
    let Ok(value) = value.to_str() else {
        return Credential::Malformed;
    };
    let mut fields = value.split(' ');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(TOKEN_SCHEME), Some(token), None) if !token.is_empty() => {
            Credential::Token(token.to_owned())
        }
        _ => Credential::Malformed,
    }
}

async fn state_from<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

async fn authenticate(state: &HttpState, token: &str) -> Result<User, HttpError> {
    state
        .services
        .authenticate(token)
        .await
        .map_err(|err| match err {
            ApplicationError::Unauthorized(_) => HttpError::unauthorized(INVALID_TOKEN),
            other => HttpError::from_error(other),
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts, state).await?;

        match read_credential(parts) {
            Credential::Token(token) => Ok(Self(authenticate(&app_state, &token).await?)),
            Credential::Absent | Credential::Malformed => {
                Err(HttpError::unauthorized(INVALID_TOKEN))
            }
        }
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    /// A header that does not parse as `Token <token>` reads as anonymous,
    /// but a well-formed token must resolve.
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = state_from(parts, state).await?;

        match read_credential(parts) {
            Credential::Absent | Credential::Malformed => Ok(Self(None)),
            Credential::Token(token) => Ok(Self(Some(authenticate(&app_state, &token).await?))),
        }
    }
}
