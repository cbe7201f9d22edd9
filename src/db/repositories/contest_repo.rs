//! Contest repository

use sqlx::SqliteConnection;

use crate::{
    error::AppResult,
    models::{Contest, ContestChanges, NewContest},
};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Insert a contest and return it with its assigned id
    pub async fn create(conn: &mut SqliteConnection, contest: &NewContest) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            INSERT INTO contests (class_level, year, pre_number, contest_url, solution_url)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, class_level, year, pre_number, contest_url, solution_url
            "#,
        )
        .bind(contest.class_level)
        .bind(contest.year)
        .bind(contest.pre_number)
        .bind(&contest.contest_url)
        .bind(&contest.solution_url)
        .fetch_one(conn)
        .await?;

        Ok(contest)
    }

    /// Find contest by ID
    pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, class_level, year, pre_number, contest_url, solution_url
            FROM contests WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(contest)
    }

    /// Apply the present fields of `changes`; `None` when no row has this id
    pub async fn update(
        conn: &mut SqliteConnection,
        id: i64,
        changes: &ContestChanges,
    ) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"
            UPDATE contests
            SET
                class_level = COALESCE(?, class_level),
                year = COALESCE(?, year),
                pre_number = COALESCE(?, pre_number),
                contest_url = COALESCE(?, contest_url),
                solution_url = COALESCE(?, solution_url)
            WHERE id = ?
            RETURNING id, class_level, year, pre_number, contest_url, solution_url
            "#,
        )
        .bind(changes.class_level)
        .bind(changes.year)
        .bind(changes.pre_number)
        .bind(changes.contest_url.as_deref())
        .bind(changes.solution_url.as_deref())
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(contest)
    }

    /// Delete contest, returning whether a row was removed
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM contests WHERE id = ?"#)
            .bind(id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All contests, newest year first
    pub async fn list_all(conn: &mut SqliteConnection) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, class_level, year, pre_number, contest_url, solution_url
            FROM contests
            ORDER BY year DESC, pre_number ASC, id ASC
            "#,
        )
        .fetch_all(conn)
        .await?;

        Ok(contests)
    }

    /// Contests for one class level, newest year first
    pub async fn list_by_class(
        conn: &mut SqliteConnection,
        class_level: i32,
    ) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, class_level, year, pre_number, contest_url, solution_url
            FROM contests
            WHERE class_level = ?
            ORDER BY year DESC, pre_number ASC, id ASC
            "#,
        )
        .bind(class_level)
        .fetch_all(conn)
        .await?;

        Ok(contests)
    }

    /// Contests for one year, by class level then pre number
    pub async fn list_by_year(conn: &mut SqliteConnection, year: i64) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, class_level, year, pre_number, contest_url, solution_url
            FROM contests
            WHERE year = ?
            ORDER BY class_level ASC, pre_number ASC, id ASC
            "#,
        )
        .bind(year)
        .fetch_all(conn)
        .await?;

        Ok(contests)
    }

    /// Count total contests
    pub async fn count(conn: &mut SqliteConnection) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests"#)
            .fetch_one(conn)
            .await?;

        Ok(count)
    }
}
