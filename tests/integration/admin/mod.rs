//! Admin endpoint integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{cloud_config_json, item_json, request, TestApp, ADMIN_PASSWORD};

#[tokio::test]
async fn test_login_with_default_password() {
    let app = TestApp::new().await.unwrap();

    let (status, body) = app
        .send(request(
            Method::POST,
            "/v1/admin/login",
            None,
            Some(json!({"password": "admin123"})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (status, body) = app
        .send(request(
            Method::POST,
            "/v1/admin/login",
            None,
            Some(json!({"password": "nope"})),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "AUTHENTICATION_ERROR");
}

#[tokio::test]
async fn test_malformed_login_body_uses_error_envelope() {
    let app = TestApp::new().await.unwrap();

    let (status, body) = app
        .send(request(
            Method::POST,
            "/v1/admin/login",
            None,
            Some(json!({"pass": "admin123"})),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new().await.unwrap();

    let (status, _) = app
        .send(request(
            Method::PUT,
            "/v1/admin/password",
            Some(ADMIN_PASSWORD),
            Some(json!({"password": "abc"})),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(request(
            Method::PUT,
            "/v1/admin/password",
            Some(ADMIN_PASSWORD),
            Some(json!({"password": "s3cret"})),
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The old passphrase no longer opens the gate
    let (status, _) = app
        .send(request(Method::GET, "/v1/admin/status", Some(ADMIN_PASSWORD), None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(request(Method::GET, "/v1/admin/status", Some("s3cret"), None))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_status_reports_count_and_value() {
    let app = TestApp::new().await.unwrap();
    let mut expensive = item_json("1", "png", "cat", 1000);
    expensive["price"] = json!(1.0);
    for item in [expensive, item_json("2", "js", "x", 2000)] {
        app.send(request(Method::POST, "/v1/inventory", None, Some(item)))
            .await;
    }

    let (status, body) = app
        .send(request(Method::GET, "/v1/admin/status", Some(ADMIN_PASSWORD), None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cloudActive"], false);
    assert_eq!(body["itemCount"], 2);
    assert!((body["totalValue"].as_f64().unwrap() - 1.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_cloud_config_toggles_backend() {
    let app = TestApp::new().await.unwrap();

    let (status, _) = app
        .send(request(
            Method::PUT,
            "/v1/admin/cloud-config",
            Some(ADMIN_PASSWORD),
            Some(cloud_config_json()),
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .send(request(Method::GET, "/v1/admin/status", Some(ADMIN_PASSWORD), None))
        .await;
    assert_eq!(body["cloudActive"], true);

    let (status, _) = app
        .send(request(
            Method::DELETE,
            "/v1/admin/cloud-config",
            Some(ADMIN_PASSWORD),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .send(request(Method::GET, "/v1/admin/status", Some(ADMIN_PASSWORD), None))
        .await;
    assert_eq!(body["cloudActive"], false);
}

#[tokio::test]
async fn test_unusable_cloud_config_stays_local() {
    let app = TestApp::new().await.unwrap();
    let mut config = cloud_config_json();
    config["projectId"] = json!("");

    let (status, _) = app
        .send(request(
            Method::PUT,
            "/v1/admin/cloud-config",
            Some(ADMIN_PASSWORD),
            Some(config),
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .send(request(Method::GET, "/v1/admin/status", Some(ADMIN_PASSWORD), None))
        .await;
    assert_eq!(body["cloudActive"], false);
}
