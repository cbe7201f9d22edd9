//! Contest model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contest database model
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    /// School class the contest targets (9-12)
    pub class_level: i32,
    pub year: i32,
    /// Sequence number of the contest within its class and year (1-3)
    pub pre_number: i32,
    pub contest_url: String,
    pub solution_url: String,
}

/// Field values for a contest that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContest {
    pub class_level: i32,
    pub year: i32,
    pub pre_number: i32,
    pub contest_url: String,
    pub solution_url: String,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContestChanges {
    pub class_level: Option<i32>,
    pub year: Option<i32>,
    pub pre_number: Option<i32>,
    pub contest_url: Option<String>,
    pub solution_url: Option<String>,
}

impl ContestChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.class_level.is_none()
            && self.year.is_none()
            && self.pre_number.is_none()
            && self.contest_url.is_none()
            && self.solution_url.is_none()
    }
}
