mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let server = common::make_server();

    let response = server.get("/api/courses").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
    assert_eq!(json["total_elements"], 0);
    assert_eq!(json["total_pages"], 0);
}

#[tokio::test]
async fn test_list_paginates() {
    let server = common::make_server();
    for i in 1..=5 {
        common::create_course(&server, &format!("Course number {i}")).await;
    }

    let response = server.get("/api/courses?page=1&page_size=2").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Course number 3");
    assert_eq!(items[1]["name"], "Course number 4");
    assert_eq!(json["total_elements"], 5);
    assert_eq!(json["total_pages"], 3);
}

#[tokio::test]
async fn test_list_uses_default_page_size() {
    let server = common::make_server();
    for i in 1..=12 {
        common::create_course(&server, &format!("Course number {i}")).await;
    }

    let json = server.get("/api/courses").await.json::<Value>();

    assert_eq!(
        json["items"].as_array().unwrap().len() as i64,
        common::DEFAULT_PAGE_SIZE
    );
    assert_eq!(json["total_pages"], 2);
}

#[tokio::test]
async fn test_list_invalid_pagination() {
    let server = common::make_server();

    for query in ["page_size=0", "page_size=101", "page_size=-3", "page=-1"] {
        let response = server.get(&format!("/api/courses?{query}")).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_list_non_numeric_pagination() {
    let server = common::make_server();

    for query in ["page=abc", "page_size=ten"] {
        let response = server.get(&format!("/api/courses?{query}")).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }
}

// ─── LOAD ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_then_load_round_trip() {
    let server = common::make_server();
    let body = common::course_body("Angular with Spring", "Front-end", &["Introduction", "Components"]);

    let created = server.post("/api/courses").json(&body).await.json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/courses/{id}")).await;

    response.assert_status_ok();

    let loaded = response.json::<Value>();
    assert_eq!(loaded, created);
    assert_eq!(loaded["name"], body["name"]);
    assert_eq!(loaded["category"], body["category"]);
    let lessons = loaded["lessons"].as_array().unwrap();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0]["name"], "Introduction");
    assert_eq!(lessons[1]["name"], "Components");
    assert!(lessons.iter().all(|l| l["id"].is_i64()));
}

#[tokio::test]
async fn test_load_not_found() {
    let server = common::make_server();

    let response = server.get("/api/courses/404").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["id"], 404);
}

#[tokio::test]
async fn test_load_non_positive_id() {
    let server = common::make_server();

    let response = server.get("/api/courses/0").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_load_non_numeric_id() {
    let server = common::make_server();

    let response = server.get("/api/courses/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");

    let response = server.delete("/api/courses/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_success() {
    let server = common::make_server();

    let response = server
        .post("/api/courses")
        .json(&common::course_body("Spring Boot basics", "Back-end", &["Getting started"]))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Spring Boot basics");
    assert_eq!(body["category"], "Back-end");
    assert_eq!(body["lessons"][0]["youtube_url"], "Nb4uxLxdvxo");
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let server = common::make_server();
    let mut body = common::course_body("Spring Boot basics", "Back-end", &["Getting started"]);
    body["id"] = json!(999);

    let response = server.post("/api/courses").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let server = common::make_server();

    let invalid = [
        common::course_body("abc", "Front-end", &["Introduction"]),
        common::course_body("Angular with Spring", "Mobile", &["Introduction"]),
        common::course_body("Angular with Spring", "Front-end", &[]),
        common::course_body("Angular with Spring", "Front-end", &["abc"]),
    ];

    for body in invalid {
        let response = server.post("/api/courses").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }

    let list = server.get("/api/courses").await.json::<Value>();
    assert_eq!(list["total_elements"], 0);
}

#[tokio::test]
async fn test_create_missing_fields() {
    let server = common::make_server();

    let mut missing_category = common::course_body("Angular with Spring", "Front-end", &["Introduction"]);
    missing_category.as_object_mut().unwrap().remove("category");
    let mut missing_lessons = common::course_body("Angular with Spring", "Front-end", &["Introduction"]);
    missing_lessons.as_object_mut().unwrap().remove("lessons");

    for body in [missing_category, missing_lessons] {
        let response = server.post("/api/courses").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert!(json["error"]["message"].as_str().unwrap().contains("missing field"));
    }

    let list = server.get("/api/courses").await.json::<Value>();
    assert_eq!(list["total_elements"], 0);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = common::make_server();

    let response = server
        .post("/api/courses")
        .bytes("{\"name\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_replaces_fields_and_lessons() {
    let server = common::make_server();
    let created = server
        .post("/api/courses")
        .json(&common::course_body(
            "Angular with Spring",
            "Front-end",
            &["Old lesson one", "Old lesson two"],
        ))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/api/courses/{id}"))
        .json(&common::course_body("Spring Boot basics", "Back-end", &["New lesson"]))
        .await;

    response.assert_status_ok();

    let updated = response.json::<Value>();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Spring Boot basics");
    assert_eq!(updated["category"], "Back-end");

    let loaded = server
        .get(&format!("/api/courses/{id}"))
        .await
        .json::<Value>();
    let lessons = loaded["lessons"].as_array().unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0]["name"], "New lesson");
    let old_ids: Vec<&Value> = created["lessons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| &l["id"])
        .collect();
    assert!(!old_ids.contains(&&lessons[0]["id"]));
}

#[tokio::test]
async fn test_update_not_found_makes_no_mutation() {
    let server = common::make_server();
    common::create_course(&server, "Existing course").await;

    let response = server
        .put("/api/courses/77")
        .json(&common::course_body("Spring Boot basics", "Back-end", &["New lesson"]))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["details"]["id"], 77);

    let list = server.get("/api/courses").await.json::<Value>();
    assert_eq!(list["total_elements"], 1);
    assert_eq!(list["items"][0]["name"], "Existing course");
}

#[tokio::test]
async fn test_update_invalid_body() {
    let server = common::make_server();
    let id = common::create_course(&server, "Existing course").await;

    let response = server
        .put(&format!("/api/courses/{id}"))
        .json(&common::course_body("Existing course", "Front-end", &[]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let loaded = server
        .get(&format!("/api/courses/{id}"))
        .await
        .json::<Value>();
    assert_eq!(loaded["lessons"].as_array().unwrap().len(), 1);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_success() {
    let server = common::make_server();
    let id = common::create_course(&server, "Doomed course").await;

    let response = server.delete(&format!("/api/courses/{id}")).await;

    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/courses/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_not_found() {
    let server = common::make_server();
    common::create_course(&server, "Survivor course").await;

    let response = server.delete("/api/courses/12").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["details"]["id"], 12);

    let list = server.get("/api/courses").await.json::<Value>();
    assert_eq!(list["total_elements"], 1);
}

#[tokio::test]
async fn test_delete_non_positive_id() {
    let server = common::make_server();

    let response = server.delete("/api/courses/-4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
