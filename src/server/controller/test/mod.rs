use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    data::{memory::InMemoryPersonRepository, person::PersonRepository, StoreKind},
    router,
    service::validation::ValidationRules,
    state::AppState,
};


const BASE: &str = "/api/persons";

/// Builds the full application over a fresh store of the given kind.
///
/// The returned context keeps the in-memory database alive for database-backed apps.
async fn test_app(kind: StoreKind) -> (Router, Option<TestContext>) {
    let rules = ValidationRules::for_store(kind);

    match kind {
        StoreKind::Memory => {
            let state = AppState::new(Arc::new(InMemoryPersonRepository::new()), rules);
            (router::app(state, BASE, None), None)
        }
        StoreKind::Database => {
            let test = TestBuilder::new().with_person_table().build().await.unwrap();
            let db = test.db.clone().unwrap();
            let state = AppState::new(Arc::new(PersonRepository::new(db)), rules);
            (router::app(state, BASE, None), Some(test))
        }
    }
}

/// Sends a request and returns the status with the parsed JSON body (`Null` when empty).
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Sends a request and returns the status with the raw body text.
async fn send_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn person_body(name: &str, number: &str) -> Value {
    json!({ "name": name, "number": number })
}
