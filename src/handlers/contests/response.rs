//! Contest response DTOs

use serde::Serialize;

use crate::models::Contest;

/// Contest response
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub id: i64,
    pub class_level: i32,
    pub year: i32,
    pub pre_number: i32,
    pub contest_url: String,
    pub solution_url: String,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        Self {
            id: contest.id,
            class_level: contest.class_level,
            year: contest.year,
            pre_number: contest.pre_number,
            contest_url: contest.contest_url,
            solution_url: contest.solution_url,
        }
    }
}
