//! Common test utilities and fixtures for integration tests
//!
//! Every `TestApp` owns a temporary data directory, a shared mock document
//! store (so tests can inspect and sabotage the cloud backend) and a mock
//! generation service.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, Response},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use vibeforge_app::{build_router, AppServices};
use vibeforge_common::FileKeyValueStore;
use vibeforge_docstore::mock::MockDocumentStore;
use vibeforge_docstore::{CloudConfig, DocStoreError, DocumentStore};
use vibeforge_genai::mock::MockGenerationService;
use vibeforge_inventory::{CloudConnector, StoreOptions};

pub const ADMIN_PASSWORD: &str = "admin123";

/// Hands every connection the same in-memory collection
pub struct SharedMockConnector(pub MockDocumentStore);

impl CloudConnector for SharedMockConnector {
    fn connect(&self, config: &CloudConfig) -> Result<Arc<dyn DocumentStore>, DocStoreError> {
        if config.project_id.trim().is_empty() {
            return Err(DocStoreError::Configuration(
                "projectId is required".to_string(),
            ));
        }
        Ok(Arc::new(self.0.clone()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub remote: MockDocumentStore,
    pub generator: MockGenerationService,
    pub data_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        let data_dir = tempfile::tempdir()?;
        Self::with_data_dir(data_dir).await
    }

    /// Build an app over an existing data directory, e.g. to simulate a restart
    pub async fn with_data_dir(data_dir: TempDir) -> anyhow::Result<Self> {
        let remote = MockDocumentStore::new();
        let generator = MockGenerationService::new();

        let services = AppServices {
            kv: Arc::new(FileKeyValueStore::open(data_dir.path())?),
            connector: Arc::new(SharedMockConnector(remote.clone())),
            generator: Arc::new(generator.clone()),
            store_options: StoreOptions::default(),
        };

        Ok(Self {
            router: build_router(services).await,
            remote,
            generator,
            data_dir,
        })
    }

    pub fn test_router(&self) -> Router {
        self.router.clone()
    }

    /// Send a request and return status plus parsed JSON body (`Null` when empty)
    pub async fn send(&self, req: Request<Body>) -> (axum::http::StatusCode, Value) {
        let resp = self.test_router().oneshot(req).await.unwrap();
        let status = resp.status();
        (status, parse_body(resp).await)
    }
}

/// Helper: build a JSON request, optionally carrying the admin passphrase
pub fn request(method: Method, uri: &str, admin: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(password) = admin {
        builder = builder.header("x-admin-password", password);
    }

    if let Some(b) = body {
        builder = builder.header("content-type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&body).unwrap()
}

pub fn item_json(id: &str, category: &str, name: &str, date_created: i64) -> Value {
    json!({
        "id": id,
        "type": "code",
        "category": category,
        "name": name,
        "content": "console.log('hi')",
        "price": 0.5,
        "dateCreated": date_created
    })
}

pub fn cloud_config_json() -> Value {
    json!({
        "apiKey": "test-key",
        "authDomain": "vibe.firebaseapp.com",
        "projectId": "vibe-project",
        "storageBucket": "vibe.appspot.com",
        "messagingSenderId": "123",
        "appId": "1:123:web:abc"
    })
}
