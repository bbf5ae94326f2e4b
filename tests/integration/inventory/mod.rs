//! Inventory endpoint integration tests

use axum::http::{Method, StatusCode};

use crate::common::{cloud_config_json, item_json, request, TestApp, ADMIN_PASSWORD};

mod test_local_backend {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_save_then_list() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app
            .send(request(
                Method::POST,
                "/v1/inventory",
                None,
                Some(item_json("1", "js", "x", 1000)),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], "1");

        let (status, body) = app
            .send(request(Method::GET, "/v1/inventory", None, None))
            .await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "x");
        assert_eq!(items[0]["type"], "code");
    }

    #[tokio::test]
    async fn test_duplicate_name_in_category_is_409() {
        let app = TestApp::new().await.unwrap();
        app.send(request(
            Method::POST,
            "/v1/inventory",
            None,
            Some(item_json("1", "js", "x", 1000)),
        ))
        .await;

        let (status, body) = app
            .send(request(
                Method::POST,
                "/v1/inventory",
                None,
                Some(item_json("2", "js", "x", 2000)),
            ))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "DUPLICATE_ITEM");

        let (_, body) = app
            .send(request(Method::GET, "/v1/inventory", None, None))
            .await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_newest_save_listed_first() {
        let app = TestApp::new().await.unwrap();
        for (id, date) in [("a", 1000), ("b", 2000)] {
            app.send(request(
                Method::POST,
                "/v1/inventory",
                None,
                Some(item_json(id, "js", id, date)),
            ))
            .await;
        }

        let (_, body) = app
            .send(request(Method::GET, "/v1/inventory", None, None))
            .await;
        assert_eq!(body[0]["dateCreated"], 2000);
        assert_eq!(body[1]["dateCreated"], 1000);
    }

    #[tokio::test]
    async fn test_invalid_item_is_400() {
        let app = TestApp::new().await.unwrap();
        let mut item = item_json("1", "js", "", 1000);
        let (status, body) = app
            .send(request(Method::POST, "/v1/inventory", None, Some(item.clone())))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        item["name"] = "ok".into();
        item["type"] = "video".into();
        let (status, _) = app
            .send(request(Method::POST, "/v1/inventory", None, Some(item)))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_requires_admin() {
        let app = TestApp::new().await.unwrap();
        app.send(request(
            Method::POST,
            "/v1/inventory",
            None,
            Some(item_json("1", "js", "x", 1000)),
        ))
        .await;

        let (status, _) = app
            .send(request(Method::DELETE, "/v1/inventory/1", None, None))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app
            .send(request(Method::DELETE, "/v1/inventory/1", Some("wrong"), None))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app
            .send(request(
                Method::DELETE,
                "/v1/inventory/1",
                Some(ADMIN_PASSWORD),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        // Deleting a missing id locally is still a success
        let (status, _) = app
            .send(request(
                Method::DELETE,
                "/v1/inventory/1",
                Some(ADMIN_PASSWORD),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_items_survive_restart() {
        let app = TestApp::new().await.unwrap();
        app.send(request(
            Method::POST,
            "/v1/inventory",
            None,
            Some(item_json("1", "js", "x", 1000)),
        ))
        .await;

        let restarted = TestApp::with_data_dir(app.data_dir).await.unwrap();
        let (_, body) = restarted
            .send(request(Method::GET, "/v1/inventory", None, None))
            .await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}

mod test_cloud_backend {
    use super::*;

    async fn cloud_app() -> TestApp {
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
        app
    }

    #[tokio::test]
    async fn test_listed_id_is_remote_id() {
        let app = cloud_app().await;
        app.send(request(
            Method::POST,
            "/v1/inventory",
            None,
            Some(item_json("abc", "js", "x", 1000)),
        ))
        .await;

        let (_, body) = app
            .send(request(Method::GET, "/v1/inventory", None, None))
            .await;
        let remote_id = body[0]["id"].as_str().unwrap().to_string();
        assert_ne!(remote_id, "abc");

        let (status, _) = app
            .send(request(
                Method::DELETE,
                &format!("/v1/inventory/{remote_id}"),
                Some(ADMIN_PASSWORD),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(app.remote.documents("inventory").is_empty());
    }

    #[tokio::test]
    async fn test_id_returned_by_save_deletes_the_item() {
        let app = cloud_app().await;
        let (status, body) = app
            .send(request(
                Method::POST,
                "/v1/inventory",
                None,
                Some(item_json("abc", "js", "x", 1000)),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let stored_id = body["id"].as_str().unwrap().to_string();
        assert_ne!(stored_id, "abc");
        assert_eq!(body["name"], "x");

        let (status, _) = app
            .send(request(
                Method::DELETE,
                &format!("/v1/inventory/{stored_id}"),
                Some(ADMIN_PASSWORD),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(app.remote.documents("inventory").is_empty());
    }

    #[tokio::test]
    async fn test_remote_write_failure_is_502() {
        let app = cloud_app().await;
        app.remote.behavior().set_fail_writes(true);

        let (status, body) = app
            .send(request(
                Method::POST,
                "/v1/inventory",
                None,
                Some(item_json("1", "js", "x", 1000)),
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_remote_delete_failure_is_502() {
        let app = cloud_app().await;
        app.remote.behavior().set_fail_deletes(true);

        let (status, _) = app
            .send(request(
                Method::DELETE,
                "/v1/inventory/doc-1",
                Some(ADMIN_PASSWORD),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_remote_read_failure_serves_local_items() {
        let app = TestApp::new().await.unwrap();
        app.send(request(
            Method::POST,
            "/v1/inventory",
            None,
            Some(item_json("local-1", "js", "cached", 500)),
        ))
        .await;

        app.send(request(
            Method::PUT,
            "/v1/admin/cloud-config",
            Some(ADMIN_PASSWORD),
            Some(cloud_config_json()),
        ))
        .await;
        app.remote.behavior().set_fail_reads(true);

        let (status, body) = app
            .send(request(Method::GET, "/v1/inventory", None, None))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], "local-1");
    }
}
