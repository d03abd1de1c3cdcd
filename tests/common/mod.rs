#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use course_catalog::api::handlers::health_handler;
use course_catalog::api::routes::course_routes;
use course_catalog::infrastructure::persistence::InMemoryCourseRepository;
use course_catalog::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryCourseRepository::new()), DEFAULT_PAGE_SIZE)
}

pub fn make_server() -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", course_routes())
        .with_state(create_test_state());
    TestServer::new(app).unwrap()
}

pub fn course_body(name: &str, category: &str, lessons: &[&str]) -> Value {
    json!({
        "name": name,
        "category": category,
        "lessons": lessons
            .iter()
            .map(|lesson| json!({ "name": lesson, "youtube_url": "Nb4uxLxdvxo" }))
            .collect::<Vec<_>>(),
    })
}

pub async fn create_course(server: &TestServer, name: &str) -> i64 {
    let response = server
        .post("/api/courses")
        .json(&course_body(name, "Front-end", &["Introduction"]))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
