//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tower::ServiceExt;

use contest_hub::{
    AppState,
    config::{AuthConfig, Config, DatabaseConfig, LogFormat, ServerConfig},
    db,
};

pub const TEST_PASSWORD: &str = "chtcoder@prehsg";

pub fn test_config(database_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            log_format: LogFormat::Pretty,
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 1,
            seed_sample_data: false,
        },
        auth: AuthConfig {
            admin_password: TEST_PASSWORD.to_string(),
        },
    }
}

/// Single-connection in-memory pool; the database lives as long as the connection.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    db::init_schema(&pool)
        .await
        .expect("Failed to create schema");

    pool
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = memory_pool().await;
        let state = AppState::new(pool, test_config("sqlite::memory:"));
        let router = contest_hub::app(state.clone());
        Self { router, state }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn login(&self) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "password": TEST_PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    /// Create a contest and return the stored record
    pub async fn create(
        &self,
        token: &str,
        class_level: i32,
        year: i32,
        pre_number: i32,
    ) -> Value {
        let (status, body) = self
            .request(
                Method::POST,
                "/contests",
                Some(token),
                Some(contest_body(class_level, year, pre_number)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", body);
        body
    }
}

pub fn contest_body(class_level: i32, year: i32, pre_number: i32) -> Value {
    json!({
        "class_level": class_level,
        "year": year,
        "pre_number": pre_number,
        "contest_url": format!("https://contest/{}/{}/{}", class_level, year, pre_number),
        "solution_url": format!("https://solution/{}/{}/{}", class_level, year, pre_number),
    })
}

/// (class_level, year, pre_number) triples of a list response
pub fn keys(list: &Value) -> Vec<(i64, i64, i64)> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["class_level"].as_i64().unwrap(),
                c["year"].as_i64().unwrap(),
                c["pre_number"].as_i64().unwrap(),
            )
        })
        .collect()
}
