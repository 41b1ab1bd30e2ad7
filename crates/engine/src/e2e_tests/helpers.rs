//! Shared helpers for router-level tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use crate::app::App;
use crate::infrastructure::ports::CharacterStore;
use crate::infrastructure::sqlite::SqliteCharacterStore;

/// Router over an in-memory store seeded with the test character `Bran`:
/// 20 hit points, no temp HP, fire resistance, poison immunity.
pub async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool should connect");
    let store = Arc::new(
        SqliteCharacterStore::with_pool(pool)
            .await
            .expect("schema creation should succeed"),
    );

    let sheet = serde_json::from_value(serde_json::json!({
        "name": "Bran",
        "level": 3,
        "hitPoints": 20,
        "classes": [
            {"name": "fighter", "hitDiceValue": 10, "classLevel": 3}
        ],
        "stats": {
            "strength": 14, "dexterity": 12, "constitution": 13,
            "intelligence": 10, "wisdom": 11, "charisma": 9
        },
        "items": [
            {
                "name": "Cloak of Protection",
                "modifier": {
                    "affectedObject": "stats",
                    "affectedValue": "dexterity",
                    "value": 1
                }
            }
        ],
        "defenses": [
            {"type": "fire", "defense": "resistance"},
            {"type": "poison", "defense": "immunity"}
        ]
    }))
    .expect("test sheet should parse");
    store.populate(&sheet).await.expect("populate should succeed");

    crate::api::http::routes().with_state(Arc::new(App::new(store)))
}

/// POST a JSON body and decode the JSON response.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

/// GET a route and decode the JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

/// GET a route and return the raw body text.
pub async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
