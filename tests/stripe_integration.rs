use actix_web::test::TestRequest;
use actix_web::{App, test, web};
use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;
use std::sync::OnceLock;
use tokio::sync::Mutex;

use camp_school_api::api::payments::{available_seat_decrement, create_payment_intent};
use camp_school_api::api::selections::delete_selected_course;

mod support;

// STRIPE_API_BASE_URL is process-global; serialize the tests that point it
// at a mock server.
static STRIPE_ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn set_env(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

#[actix_web::test]
async fn create_payment_intent_requests_minor_units_and_returns_client_secret() {
    let _guard = STRIPE_ENV_LOCK.get_or_init(|| Mutex::new(())).lock().await;

    let server = MockServer::start_async().await;
    set_env("STRIPE_API_BASE_URL", &server.url(""));

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/payment_intents")
            .header("Authorization", "Bearer sk_test_dummy")
            .body_contains("amount=1999")
            .body_contains("currency=usd");
        then.status(200).json_body(json!({
            "id": "pi_123",
            "client_secret": "pi_123_secret_abc"
        }));
    });

    let state = web::Data::new(support::detached_state().await);
    let app = test::init_service(App::new().app_data(state).service(create_payment_intent)).await;

    let req = TestRequest::post()
        .uri("/student/selected-course/create-payment-intent")
        .set_json(json!({ "price": 19.99 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["clientSecret"], "pi_123_secret_abc");
    mock.assert();
}

#[actix_web::test]
async fn create_payment_intent_rejects_non_positive_price() {
    let state = web::Data::new(support::detached_state().await);
    let app = test::init_service(App::new().app_data(state).service(create_payment_intent)).await;

    for price in [json!(0.0), json!(-5.0)] {
        let req = TestRequest::post()
            .uri("/student/selected-course/create-payment-intent")
            .set_json(json!({ "price": price }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation");
    }
}

#[actix_web::test]
async fn provider_failure_surfaces_as_upstream_error() {
    let _guard = STRIPE_ENV_LOCK.get_or_init(|| Mutex::new(())).lock().await;

    let server = MockServer::start_async().await;
    set_env("STRIPE_API_BASE_URL", &server.url(""));

    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/payment_intents");
        then.status(402)
            .json_body(json!({ "error": { "message": "Your card was declined." } }));
    });

    let state = web::Data::new(support::detached_state().await);
    let app = test::init_service(App::new().app_data(state).service(create_payment_intent)).await;

    let req = TestRequest::post()
        .uri("/student/selected-course/create-payment-intent")
        .set_json(json!({ "price": 12.5 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "upstream_unavailable");
    mock.assert();
}

#[actix_web::test]
async fn malformed_ids_are_rejected_before_the_store() {
    // A detached state would hang on any real store call; a fast 400 here
    // proves the id check fires first.
    let state = web::Data::new(support::detached_state().await);
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(available_seat_decrement)
            .service(delete_selected_course),
    )
    .await;

    let req = TestRequest::patch()
        .uri("/student/course/available-seat-decrement/not-an-id")
        .set_json(json!({ "available_seats": 10 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "malformed_identifier");

    let req = TestRequest::delete()
        .uri("/student/delete-selected-course/1234")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "malformed_identifier");
}

#[actix_web::test]
async fn seat_decrement_rejects_non_positive_counts() {
    let state = web::Data::new(support::detached_state().await);
    let app = test::init_service(App::new().app_data(state).service(available_seat_decrement)).await;

    let req = TestRequest::patch()
        .uri("/student/course/available-seat-decrement/64af1f77bcf86cd799439011")
        .set_json(json!({ "available_seats": 0 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation");
}
