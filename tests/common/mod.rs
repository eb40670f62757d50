#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use election_api::db::{self, DbPool};
use election_api::startup::AppState;
use serde_json::Value;
use tower::ServiceExt;

/// Open a fresh in-memory election database with the schema in place.
pub async fn test_pool() -> DbPool {
    db::init_db("sqlite::memory:")
        .await
        .expect("in-memory database should open")
}

/// Build the full application router over a fresh in-memory database.
pub async fn build_test_app() -> Router {
    election_api::app(AppState::new(test_pool().await))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
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

pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request should build");

    app.clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Create a candidate through the API and return its id.
pub async fn create_candidate(app: &Router, first: &str, last: &str, industry: bool) -> i64 {
    let json = body_json(
        post_json(
            app,
            "/api/candidate",
            serde_json::json!({
                "first_name": first,
                "last_name": last,
                "industry_connected": industry
            }),
        )
        .await,
    )
    .await;
    json["id"].as_i64().expect("candidate id")
}

/// Register a voter through the API and return its id.
pub async fn create_voter(app: &Router, first: &str, last: &str, email: &str) -> i64 {
    let json = body_json(
        post_json(
            app,
            "/api/voter",
            serde_json::json!({"first_name": first, "last_name": last, "email": email}),
        )
        .await,
    )
    .await;
    json["id"].as_i64().expect("voter id")
}

/// Create a party through the API and return its id.
pub async fn create_party(app: &Router, name: &str) -> i64 {
    let json = body_json(post_json(app, "/api/party", serde_json::json!({"name": name})).await).await;
    json["id"].as_i64().expect("party id")
}
