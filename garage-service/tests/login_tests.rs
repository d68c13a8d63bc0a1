mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_with_valid_credentials() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .post(format!("{}/login", app.address))
        .json(&json!({
            "username": "admin",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let auth_header = response
        .headers()
        .get("authorization")
        .expect("Authorization header should be echoed")
        .to_str()
        .expect("Header should be valid ASCII")
        .to_string();
    assert!(auth_header.starts_with("Bearer "));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("token should be a string");
    assert!(!token.is_empty());

    // The echoed header carries the same token as the body.
    assert_eq!(auth_header, format!("Bearer {}", token));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .post(format!("{}/login", app.address))
        .json(&json!({
            "username": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_login_with_unknown_username() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .post(format!("{}/login", app.address))
        .json(&json!({
            "username": "operator",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_malformed_body() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .post(format!("{}/login", app.address))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_issued_token_passes_verification() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .post(format!("{}/login", app.address))
        .json(&json!({
            "username": "admin",
            "password": "admin123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["token"].as_str().expect("token should be a string");

    let claims = app
        .jwt_handler
        .decode(token)
        .expect("Issued token should verify");
    assert_eq!(claims.sub, "admin");
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
async fn test_metrics_scrape_is_public() {
    let app = TestApp::spawn().await;

    let response = app
        .api_client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Content-Type should be set")
        .to_str()
        .expect("Header should be valid ASCII");
    assert!(content_type.starts_with("text/plain"));
}
