//! Contest request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        MAX_CLASS_LEVEL, MAX_PRE_NUMBER, MAX_YEAR, MIN_CLASS_LEVEL, MIN_PRE_NUMBER, MIN_YEAR,
    },
    models::{ContestChanges, NewContest},
};

/// Create contest request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContestRequest {
    #[validate(range(min = MIN_CLASS_LEVEL, max = MAX_CLASS_LEVEL))]
    pub class_level: i32,

    #[validate(range(min = MIN_YEAR, max = MAX_YEAR))]
    pub year: i32,

    #[validate(range(min = MIN_PRE_NUMBER, max = MAX_PRE_NUMBER))]
    pub pre_number: i32,

    pub contest_url: String,
    pub solution_url: String,
}

/// Update contest request. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContestRequest {
    #[validate(range(min = MIN_CLASS_LEVEL, max = MAX_CLASS_LEVEL))]
    pub class_level: Option<i32>,

    #[validate(range(min = MIN_YEAR, max = MAX_YEAR))]
    pub year: Option<i32>,

    #[validate(range(min = MIN_PRE_NUMBER, max = MAX_PRE_NUMBER))]
    pub pre_number: Option<i32>,

    pub contest_url: Option<String>,
    pub solution_url: Option<String>,
}

impl From<CreateContestRequest> for NewContest {
    fn from(req: CreateContestRequest) -> Self {
        Self {
            class_level: req.class_level,
            year: req.year,
            pre_number: req.pre_number,
            contest_url: req.contest_url,
            solution_url: req.solution_url,
        }
    }
}

impl From<UpdateContestRequest> for ContestChanges {
    fn from(req: UpdateContestRequest) -> Self {
        Self {
            class_level: req.class_level,
            year: req.year,
            pre_number: req.pre_number,
            contest_url: req.contest_url,
            solution_url: req.solution_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateContestRequest {
        CreateContestRequest {
            class_level: 9,
            year: 2025,
            pre_number: 1,
            contest_url: "https://x/".to_string(),
            solution_url: "https://y/".to_string(),
        }
    }

    #[test]
    fn test_create_accepts_range_bounds() {
        let mut req = valid_create();
        assert!(req.validate().is_ok());

        req.class_level = 12;
        req.year = 2100;
        req.pre_number = 3;
        assert!(req.validate().is_ok());

        req.year = 2000;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_out_of_range_fields() {
        let req = CreateContestRequest {
            class_level: 8,
            ..valid_create()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("class_level"));

        let req = CreateContestRequest {
            year: 2101,
            ..valid_create()
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("year"));

        let req = CreateContestRequest {
            pre_number: 4,
            ..valid_create()
        };
        assert!(
            req.validate()
                .unwrap_err()
                .field_errors()
                .contains_key("pre_number")
        );
    }

    #[test]
    fn test_update_only_checks_present_fields() {
        assert!(UpdateContestRequest::default().validate().is_ok());

        let req = UpdateContestRequest {
            year: Some(2026),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let req = UpdateContestRequest {
            pre_number: Some(0),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_deserializes_partial_body() {
        let req: UpdateContestRequest = serde_json::from_str(r#"{"year": 2026}"#).unwrap();
        assert_eq!(req.year, Some(2026));
        assert_eq!(req.class_level, None);
        assert_eq!(req.contest_url, None);
    }
}
