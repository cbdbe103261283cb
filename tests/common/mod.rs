#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use club_site::{config::Config, db::Database, route::create_router, AppState};

/// Fresh in-memory database with migrations applied.
pub async fn test_db() -> Database {
    Database::open_in_memory()
        .await
        .expect("in-memory database")
}

/// The production router over the given database, with team reference
/// checks switched on or off.
pub fn build_test_app(db: Database, enforce_team_refs: bool) -> Router {
    let config = Config {
        enforce_team_refs,
        ..Config::default()
    };
    let state = Arc::new(AppState::new(db, config.enforce_team_refs));
    create_router(state, &config)
}

pub async fn test_app() -> Router {
    build_test_app(test_db().await, true)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Response body as JSON, `Value::Null` when empty.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a record and return its JSON, asserting it was created.
pub async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

pub fn id_of(record: &Value) -> String {
    record["id"].as_str().unwrap().to_string()
}
