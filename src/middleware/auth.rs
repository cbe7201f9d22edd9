//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{constants::BEARER_PREFIX, error::AppError, state::AppState};

/// Verified admin bearer token, inserted by [`auth_middleware`]
#[derive(Debug, Clone)]
pub struct AdminToken(pub String);

impl<S> FromRequestParts<S> for AdminToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminToken>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Missing or invalid authorization header".to_string()))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| AppError::Unauthorized("Missing or invalid authorization header".to_string()))
}

/// Reject requests that do not carry a currently valid admin token
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let token = match bearer_token(request.headers()) {
        Ok(token) => token.to_string(),
        Err(e) => {
            debug!(path = %path, "Auth failed: missing or malformed Authorization header");
            return Err(e);
        }
    };

    if let Err(e) = state.auth().verify(&token) {
        debug!(path = %path, token_length = token.len(), "Auth failed: unknown token");
        return Err(e);
    }

    debug!(path = %path, "Admin token accepted");

    request.extensions_mut().insert(AdminToken(token));
    Ok(next.run(request).await)
}
