//! Contest handler implementations

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    error::AppResult,
    extractors::{AppJson, AppPath},
    middleware::AdminToken,
    models::Contest,
    services::ContestService,
    state::AppState,
};

use super::{
    request::{CreateContestRequest, UpdateContestRequest},
    response::ContestResponse,
};

fn to_responses(contests: Vec<Contest>) -> Vec<ContestResponse> {
    contests.into_iter().map(ContestResponse::from).collect()
}

/// List all contests
pub async fn list_contests(State(state): State<AppState>) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::list_all(state.db()).await?;
    Ok(Json(to_responses(contests)))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_by_id(state.db(), id).await?;
    Ok(Json(contest.into()))
}

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    _admin: AdminToken,
    AppJson(payload): AppJson<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    let contest = ContestService::create(state.db(), payload).await?;
    Ok((StatusCode::CREATED, Json(contest.into())))
}

/// Update a contest
pub async fn update_contest(
    State(state): State<AppState>,
    _admin: AdminToken,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateContestRequest>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::update(state.db(), id, payload).await?;
    Ok(Json(contest.into()))
}

/// Delete a contest
pub async fn delete_contest(
    State(state): State<AppState>,
    _admin: AdminToken,
    AppPath(id): AppPath<i64>,
) -> AppResult<StatusCode> {
    ContestService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List contests for one class level
pub async fn list_contests_by_class(
    State(state): State<AppState>,
    AppPath(class_level): AppPath<i64>,
) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::list_by_class(state.db(), class_level).await?;
    Ok(Json(to_responses(contests)))
}

/// List contests for one year
pub async fn list_contests_by_year(
    State(state): State<AppState>,
    AppPath(year): AppPath<i64>,
) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::list_by_year(state.db(), year).await?;
    Ok(Json(to_responses(contests)))
}
