#![cfg(feature = "ssr")]

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::json;
use storefront::api::{self, LIVENESS_MESSAGE};
use storefront::db::Database;
use storefront::models::test_record::{TestRecord, DEFAULT_MESSAGE};

// Helper function to create an in-memory store
async fn create_test_db() -> Database {
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    db
}

macro_rules! test_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db.clone()))
                .configure(api::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_liveness() {
    let db = create_test_db().await;
    let app = test_app!(db);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, LIVENESS_MESSAGE.as_bytes());
}

#[actix_web::test]
async fn test_create_then_list_newest_first() {
    let db = create_test_db().await;
    let app = test_app!(db);

    for message in ["first", "second", "third"] {
        let req = test::TestRequest::post()
            .uri("/api/test")
            .set_json(json!({ "message": message }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/test").to_request();
    let records: Vec<TestRecord> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].message, "third");
    assert!(records.windows(2).all(|pair| pair[0].id > pair[1].id));
}

#[actix_web::test]
async fn test_created_row_is_returned() {
    let db = create_test_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/test")
        .set_json(json!({ "message": "hello" }))
        .to_request();
    let created: TestRecord = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.message, "hello");

    let stored = db.list_records().await.unwrap();
    assert_eq!(stored, vec![created]);
}

#[actix_web::test]
async fn test_falsy_messages_use_placeholder() {
    let db = create_test_db().await;
    let app = test_app!(db);

    for body in [
        json!({}),
        json!({ "message": null }),
        json!({ "message": "" }),
        json!({ "message": 0 }),
        json!({ "message": false }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/test")
            .set_json(body.clone())
            .to_request();
        let created: TestRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.message, DEFAULT_MESSAGE, "body: {body}");
    }
}

#[actix_web::test]
async fn test_bodyless_post_uses_placeholder() {
    let db = create_test_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post().uri("/api/test").to_request();
    let created: TestRecord = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.message, DEFAULT_MESSAGE);

    // non-JSON bodies are not parsed at all
    let req = test::TestRequest::post()
        .uri("/api/test")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("message=ignored")
        .to_request();
    let created: TestRecord = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.message, DEFAULT_MESSAGE);
}

#[actix_web::test]
async fn test_bad_payloads_are_rejected() {
    let db = create_test_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/test")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"message\":")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/test")
        .set_json(json!({ "message": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    for scalar in [json!("abc"), json!(null)] {
        let req = test::TestRequest::post()
            .uri("/api/test")
            .set_json(scalar)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    assert!(db.list_records().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_store_failure_is_a_server_error() {
    // no schema: every statement fails
    let db = Database::new(":memory:").unwrap();
    let app = test_app!(db);

    let req = test::TestRequest::get().uri("/api/test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let req = test::TestRequest::post()
        .uri("/api/test")
        .set_json(json!({ "message": "lost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
