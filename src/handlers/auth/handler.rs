//! Authentication handler implementations

use axum::{Json, extract::State, http::HeaderMap};

use crate::{
    error::AppResult, extractors::AppJson, middleware::auth::bearer_token, state::AppState,
};

use super::{
    request::LoginRequest,
    response::{LoginResponse, LogoutResponse},
};

/// Login with the admin password
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state.auth().login(payload.password())?;
    Ok(Json(LoginResponse { token }))
}

/// Logout (invalidate the presented token)
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<LogoutResponse>> {
    let token = bearer_token(&headers)?;
    state.auth().logout(token);

    Ok(Json(LogoutResponse {
        detail: "logged out".to_string(),
    }))
}
