//! Input validation utilities

use crate::constants::{MAX_CLASS_LEVEL, MIN_CLASS_LEVEL};

/// Validate a class level taken from a path parameter
pub fn validate_class_level(class_level: i64) -> Result<i32, String> {
    if (i64::from(MIN_CLASS_LEVEL)..=i64::from(MAX_CLASS_LEVEL)).contains(&class_level) {
        i32::try_from(class_level).map_err(|e| e.to_string())
    } else {
        Err(format!(
            "Class level must be between {} and {}",
            MIN_CLASS_LEVEL, MAX_CLASS_LEVEL
        ))
    }
}
