//! Contest service
//!
//! Every operation runs in its own session. Writes commit before returning;
//! any early return drops the session and rolls back.

use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    db::{open_session, repositories::ContestRepository},
    error::{AppError, AppResult},
    handlers::contests::request::{CreateContestRequest, UpdateContestRequest},
    models::{Contest, ContestChanges, NewContest},
    utils::validate_class_level,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// All contests, ordered by year descending then pre number
    pub async fn list_all(pool: &SqlitePool) -> AppResult<Vec<Contest>> {
        let mut session = open_session(pool).await?;
        ContestRepository::list_all(&mut session).await
    }

    /// Get contest by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> AppResult<Contest> {
        let mut session = open_session(pool).await?;
        ContestRepository::find_by_id(&mut session, id)
            .await?
            .ok_or_else(|| AppError::contest_not_found(id))
    }

    /// Validate and store a new contest
    pub async fn create(pool: &SqlitePool, payload: CreateContestRequest) -> AppResult<Contest> {
        payload.validate()?;

        let new_contest: NewContest = payload.into();

        let mut session = open_session(pool).await?;
        let contest = ContestRepository::create(&mut session, &new_contest).await?;
        session.commit().await?;

        tracing::info!(
            contest_id = contest.id,
            class_level = contest.class_level,
            year = contest.year,
            pre_number = contest.pre_number,
            "Contest created"
        );

        Ok(contest)
    }

    /// Apply a partial update to an existing contest
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: UpdateContestRequest,
    ) -> AppResult<Contest> {
        payload.validate()?;
        let changes: ContestChanges = payload.into();

        if changes.is_empty() {
            return Self::get_by_id(pool, id).await;
        }

        let mut session = open_session(pool).await?;
        let contest = ContestRepository::update(&mut session, id, &changes)
            .await?
            .ok_or_else(|| AppError::contest_not_found(id))?;
        session.commit().await?;

        tracing::info!(contest_id = id, "Contest updated");
        Ok(contest)
    }

    /// Permanently remove a contest
    pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<()> {
        let mut session = open_session(pool).await?;

        if !ContestRepository::delete(&mut session, id).await? {
            return Err(AppError::contest_not_found(id));
        }

        session.commit().await?;

        tracing::info!(contest_id = id, "Contest deleted");
        Ok(())
    }

    /// Contests for a class level in 9-12
    pub async fn list_by_class(pool: &SqlitePool, class_level: i64) -> AppResult<Vec<Contest>> {
        let class_level = validate_class_level(class_level).map_err(AppError::InvalidArgument)?;

        let mut session = open_session(pool).await?;
        ContestRepository::list_by_class(&mut session, class_level).await
    }

    /// Contests for a year, ordered by class level then pre number.
    ///
    /// Any integer is accepted; years outside the storable range match nothing.
    pub async fn list_by_year(pool: &SqlitePool, year: i64) -> AppResult<Vec<Contest>> {
        let mut session = open_session(pool).await?;
        ContestRepository::list_by_year(&mut session, year).await
    }
}
