//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::Arc;

use axum::{Router, body::Body, http::Request};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use carehub::api::{AppState, app};
use carehub::core::AppConfig;
use carehub::store::SqliteStore;

/// Creates a test application router backed by a fresh SQLite
/// database in a temporary directory. The directory is removed when
/// the returned `TempDir` is dropped so keep it alive for the length
/// of the test.
pub async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    // Same path `serve` takes, so the schema is created on open
    let db_path = dir.path().join("db").to_str().unwrap().to_string();
    let store = SqliteStore::open(&db_path)
        .await
        .expect("Failed to open store");

    let app_config = AppConfig {
        storage_path: dir.path().display().to_string(),
        db_path,
        static_dir: dir.path().join("web-ui").display().to_string(),
    };
    let app_state = AppState::new(Arc::new(store), app_config);
    (app(Arc::new(app_state)), dir)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}

/// Replace a collection through the store API
pub async fn seed(app: &Router, collection: &str, records: Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/store/{}", collection))
                .method("PUT")
                .header("content-type", "application/json")
                .body(Body::from(records.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_success());
}

pub async fn get_json(app: &Router, uri: &str) -> (http::StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    (status, serde_json::from_str(&body).unwrap_or(Value::Null))
}
