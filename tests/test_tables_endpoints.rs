//! Integration tests for the table browsing endpoints: catalog listing,
//! schema introspection, and sample rows.

use actix_web::test;
use serde_json::{json, Value};

mod common;

#[actix_web::test]
async fn test_list_tables() {
    let (_dir, gateway) = common::incentive_fixture(3);
    let app = test_app!(gateway);

    let req = test::TestRequest::get().uri("/api/tables").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["tables"], json!(["Incentive"]));
}

#[actix_web::test]
async fn test_empty_database_lists_no_tables() {
    let (_dir, gateway) = common::empty_fixture();
    let app = test_app!(gateway);

    let req = test::TestRequest::get().uri("/api/tables").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["tables"], json!([]));
}

#[actix_web::test]
async fn test_schema_known_table() {
    let (_dir, gateway) = common::incentive_fixture(1);
    let app = test_app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/tables/Incentive/schema")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["table"], json!("Incentive"));

    let schema = body["schema"].as_array().unwrap();
    assert_eq!(schema.len(), 3);
    assert_eq!(schema[0]["name"], json!("id"));
    assert_eq!(schema[0]["type"], json!("INTEGER"));
    assert_eq!(schema[0]["pk"], json!(1));
    assert_eq!(schema[1]["name"], json!("region"));
    assert_eq!(schema[1]["notnull"], json!(1));
}

#[actix_web::test]
async fn test_schema_unknown_table_is_empty_not_error() {
    let (_dir, gateway) = common::incentive_fixture(1);
    let app = test_app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/tables/DoesNotExist/schema")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["schema"], json!([]));
}

#[actix_web::test]
async fn test_sample_defaults_to_ten_rows() {
    let (_dir, gateway) = common::incentive_fixture(15);
    let app = test_app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/tables/Incentive/sample")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["table"], json!("Incentive"));
    assert_eq!(body["rowCount"], json!(10));
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}

#[actix_web::test]
async fn test_sample_respects_limit() {
    let (_dir, gateway) = common::incentive_fixture(15);
    let app = test_app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/tables/Incentive/sample?limit=3")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["rowCount"], json!(3));
}

#[actix_web::test]
async fn test_sample_non_numeric_limit_falls_back_to_default() {
    let (_dir, gateway) = common::incentive_fixture(15);
    let app = test_app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/tables/Incentive/sample?limit=lots")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["rowCount"], json!(10));
}

#[actix_web::test]
async fn test_sample_unknown_table_is_validation_failure() {
    let (_dir, gateway) = common::incentive_fixture(1);
    let app = test_app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/tables/DoesNotExist/sample")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("DoesNotExist"));
}

#[actix_web::test]
async fn test_sample_injection_attempt_never_reaches_the_engine() {
    let (_dir, gateway) = common::incentive_fixture(5);
    let app = test_app!(gateway);

    let req = test::TestRequest::get()
        .uri("/api/tables/Incentive%22%3B%20DROP%20TABLE%20Incentive%3B%20--/sample")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Table untouched.
    let req = test::TestRequest::get()
        .uri("/api/tables/Incentive/sample")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["rowCount"], json!(5));
}
