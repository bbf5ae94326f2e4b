//! Studio endpoint integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{request, TestApp};

#[tokio::test]
async fn test_default_credits() {
    let app = TestApp::new().await.unwrap();
    let (status, body) = app
        .send(request(Method::GET, "/v1/credits", None, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"tier1": 2, "tier2": 3}));
}

#[tokio::test]
async fn test_purchase_credits() {
    let app = TestApp::new().await.unwrap();
    let (status, body) = app
        .send(request(
            Method::POST,
            "/v1/credits/purchase",
            None,
            Some(json!({"tier": "tier1", "amount": 5})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["credits"]["tier1"], 7);
    assert_eq!(body["price"], 5.0);

    let (status, _) = app
        .send(request(
            Method::POST,
            "/v1/credits/purchase",
            None,
            Some(json!({"tier": "tier2", "amount": 0})),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn test_image_generation_until_out_of_credits() {
    let app = TestApp::new().await.unwrap();
    let body = json!({"prompt": "neon koi", "settings": {"saturation": 90, "contrast": 50,
        "brightness": 50, "styleIntensity": 50, "hue": 50, "vibrance": 50, "sharpness": 50}});

    for _ in 0..2 {
        let (status, resp) = app
            .send(request(Method::POST, "/v1/generate/image", None, Some(body.clone())))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!(resp["image"]["dataUrl"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
        assert!(resp.get("inventory").is_none());
    }

    let (status, resp) = app
        .send(request(Method::POST, "/v1/generate/image", None, Some(body)))
        .await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(resp["error"]["code"], "INSUFFICIENT_CREDITS");

    assert!(app.generator.recorded_prompts()[0].contains("highly saturated"));
}

#[tokio::test]
async fn test_failed_image_generation_refunds_and_502s() {
    let app = TestApp::new().await.unwrap();
    app.generator.set_fail(true);

    let (status, _) = app
        .send(request(
            Method::POST,
            "/v1/generate/image",
            None,
            Some(json!({"prompt": "neon koi"})),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = app
        .send(request(Method::GET, "/v1/credits", None, None))
        .await;
    assert_eq!(body["tier1"], 2);
}

#[tokio::test]
async fn test_generate_and_save_image() {
    let app = TestApp::new().await.unwrap();
    let (status, resp) = app
        .send(request(
            Method::POST,
            "/v1/generate/image",
            None,
            Some(json!({"prompt": "neon koi", "category": "mobile", "save": true})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["inventory"], "saved");

    let (_, items) = app
        .send(request(Method::GET, "/v1/inventory", None, None))
        .await;
    assert_eq!(items[0]["type"], "image");
    assert_eq!(items[0]["category"], "mobile");
    assert_eq!(items[0]["price"], 1.0);
}

#[tokio::test]
async fn test_generate_code_strips_fences_and_saves() {
    let app = TestApp::new().await.unwrap();
    let (status, resp) = app
        .send(request(
            Method::POST,
            "/v1/generate/code",
            None,
            Some(json!({"fileType": "py", "description": "fizzbuzz", "save": true})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["code"], "// fizzbuzz");
    assert_eq!(resp["inventory"], "saved");

    let (_, items) = app
        .send(request(Method::GET, "/v1/inventory", None, None))
        .await;
    assert_eq!(items[0]["name"], "fizzbuzz.py");
    assert_eq!(items[0]["category"], "py");
}

#[tokio::test]
async fn test_api_schema_failure_returns_placeholder() {
    let app = TestApp::new().await.unwrap();
    app.generator.set_fail(true);

    let (status, resp) = app
        .send(request(
            Method::POST,
            "/v1/generate/api-schema",
            None,
            Some(json!({"description": "user login", "save": true})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["schema"]["endpoint"], "/error");
    assert!(resp.get("inventory").is_none());
}

#[tokio::test]
async fn test_tier2_generators() {
    let app = TestApp::new().await.unwrap();

    let (status, palettes) = app
        .send(request(
            Method::POST,
            "/v1/generate/palettes",
            None,
            Some(json!({"vibe": "sunset"})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(palettes.as_array().unwrap().len(), 3);

    let (status, employees) = app
        .send(request(
            Method::POST,
            "/v1/generate/employees",
            None,
            Some(json!({"prompt": "Barista", "count": 2, "type": "employee"})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(employees.as_array().unwrap().len(), 2);

    let (status, tools) = app
        .send(request(
            Method::POST,
            "/v1/generate/tools",
            None,
            Some(json!({"category": "devtools"})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tools.as_array().unwrap().len(), 3);

    // Three tier-2 credits spent
    let (status, _) = app
        .send(request(
            Method::POST,
            "/v1/generate/tools",
            None,
            Some(json!({"category": "devtools"})),
        ))
        .await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}
