//! Authentication request DTOs

use serde::Deserialize;
use serde_json::Value;

/// Admin login request. A missing or non-string password is treated like a wrong one.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    password: Option<Value>,
}

impl LoginRequest {
    /// The submitted password, or `""` when it is absent or not a string
    pub fn password(&self) -> &str {
        match &self.password {
            Some(Value::String(password)) => password,
            _ => "",
        }
    }
}
