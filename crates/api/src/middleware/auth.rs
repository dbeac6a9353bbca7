use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use brandwatch_domain::config::AuthToken;
use brandwatch_domain::{Actor, DomainError};
use std::collections::HashMap;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::errors::ApiError;
use crate::state::AppState;

const API_KEY_HEADER: &str = "X-Api-Key";
const BEARER_PREFIX: &str = "Bearer ";
const TOKEN_QUERY_PARAM: &str = "token";

/// Maps static bearer tokens to actor identities.
pub struct TokenAuthenticator {
    entries: Vec<(Vec<u8>, Actor)>,
}

impl TokenAuthenticator {
    pub fn new(tokens: &[AuthToken]) -> Self {
        Self {
            entries: tokens
                .iter()
                .map(|t| (t.token.as_bytes().to_vec(), Actor::new(&t.name, t.role)))
                .collect(),
        }
    }

    /// Every entry is compared so the match position does not leak through timing.
    pub fn authenticate(&self, candidate: &str) -> Option<Actor> {
        let candidate = candidate.as_bytes();
        let mut found = None;
        for (token, actor) in &self.entries {
            if bool::from(token.as_slice().ct_eq(candidate)) {
                found = Some(actor.clone());
            }
        }
        found
    }
}

pub async fn require_actor(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&request).ok_or(ApiError(DomainError::Unauthorized))?;
    let actor = state
        .auth
        .authenticate(&token)
        .ok_or(ApiError(DomainError::Unauthorized))?;

    debug!(actor = %actor.name, role = actor.role.to_str(), "Request authenticated");
    request.extensions_mut().insert(actor);
    Ok(next.run(request).await)
}

fn extract_token(request: &Request) -> Option<String> {
    let headers = request.headers();

    if let Some(bearer) = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
    {
        return Some(bearer.trim().to_string());
    }

    if let Some(key) = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) {
        return Some(key.trim().to_string());
    }

    let Query(params) = Query::<HashMap<String, String>>::try_from_uri(request.uri()).ok()?;
    params
        .get(TOKEN_QUERY_PARAM)
        .filter(|value| !value.is_empty())
        .cloned()
}
