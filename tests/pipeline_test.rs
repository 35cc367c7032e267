mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{TEST_ALLOWED_ORIGIN, TEST_WEBHOOK_SECRET, app, app_with_cors};
use greencart::config::cors::CorsPolicy;
use greencart::utils::webhook::sign_payload;

fn signed_header(payload: &[u8], timestamp: &str) -> String {
    let signature = sign_payload(payload, timestamp, TEST_WEBHOOK_SECRET).unwrap();
    format!("t={timestamp},v1={signature}")
}

#[tokio::test]
async fn health_check_returns_static_body() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"API is Working");
}

#[tokio::test]
async fn webhook_handler_sees_exact_raw_bytes() {
    // The signature is computed over idiosyncratically-spaced JSON; it only
    // verifies if the handler receives those exact bytes, untouched by any
    // JSON interceptor.
    let payload = br#"{ "type":  "balance.available",
        "data": { "object": {   } } }"#;
    let header_value = signed_header(payload, "1700000000");

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/stripe")
                .header("Stripe-Signature", header_value)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(&payload[..]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["received"], true);
}

#[tokio::test]
async fn webhook_rejects_a_tampered_body() {
    let signed_over = br#"{"type":"balance.available","data":{"object":{}}}"#;
    let header_value = signed_header(signed_over, "1700000000");

    // Same JSON meaning, different bytes.
    let sent = br#"{ "type": "balance.available", "data": { "object": {} } }"#;

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/stripe")
                .header("Stripe-Signature", header_value)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(&sent[..]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn webhook_rejects_missing_signature_header() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/stripe")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"type":"balance.available"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn webhook_rejects_unparseable_payload_after_verification() {
    let payload = b"not json at all";
    let header_value = signed_header(payload, "1700000000");

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/stripe")
                .header("Stripe-Signature", header_value)
                .body(Body::from(&payload[..]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn allowed_origin_is_reflected_with_credentials() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, TEST_ALLOWED_ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(TEST_ALLOWED_ORIGIN)
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn disallowed_origin_gets_no_permissive_headers() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none()
    );
}

#[tokio::test]
async fn preflight_for_allowed_origin_lists_methods() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/user/login")
                .header(header::ORIGIN, TEST_ALLOWED_ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .is_some()
    );
}

#[tokio::test]
async fn allow_any_mode_reflects_without_credentials() {
    let response = app_with_cors(CorsPolicy::AllowAny)
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "http://anywhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none()
    );
}
