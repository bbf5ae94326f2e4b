//! Firestore REST Client Implementation
//!
//! Talks to the Firestore v1 REST API
//! (`{base_url}/v1/projects/{project}/databases/{database}/documents`)
//! using the web API key from the user's `CloudConfig`.

use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::json;

use crate::codec::{decode_document, encode_fields};
use crate::{CloudConfig, DocStoreConfig, DocStoreError, Document, DocumentStore, SortDirection};

/// One element of a `runQuery` response stream. Elements without a
/// `document` carry only read metadata.
#[derive(Debug, Deserialize)]
struct RunQueryItem {
    document: Option<serde_json::Value>,
}

/// Firestore document store backed by the REST API.
pub struct FirestoreClient {
    http: Client,
    documents_url: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(config: &DocStoreConfig, cloud: &CloudConfig) -> Self {
        let documents_url = format!(
            "{}/v1/projects/{}/databases/{}/documents",
            config.base_url.trim_end_matches('/'),
            cloud.project_id,
            config.database
        );
        Self {
            http: Client::new(),
            documents_url,
            api_key: cloud.api_key.clone(),
        }
    }

    /// URL of one document. Both parts are pushed as single path segments,
    /// so a `/` inside an id is escaped instead of addressing a subcollection.
    fn document_url(&self, collection: &str, id: &str) -> Result<Url, DocStoreError> {
        let mut url = Url::parse(&self.documents_url)
            .map_err(|e| DocStoreError::Configuration(format!("Invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| DocStoreError::Configuration("Base URL cannot hold a path".to_string()))?
            .push(collection)
            .push(id);
        Ok(url)
    }

    async fn check_status(response: Response) -> Result<Response, DocStoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());
        Err(DocStoreError::Response(format!(
            "Firestore API returned {}: {}",
            status, body
        )))
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreClient {
    async fn insert(
        &self,
        collection: &str,
        data: serde_json::Value,
    ) -> Result<String, DocStoreError> {
        let url = format!("{}/{}", self.documents_url, collection);
        let body = json!({ "fields": encode_fields(&data)? });

        let response = self
            .http
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| DocStoreError::Request(e.to_string()))?;

        let resource: serde_json::Value = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| DocStoreError::Decode(e.to_string()))?;

        let document = decode_document(&resource)?;
        tracing::debug!(collection, id = %document.id, "Firestore document created");
        Ok(document.id)
    }

    async fn list_ordered(
        &self,
        collection: &str,
        field: &str,
        direction: SortDirection,
    ) -> Result<Vec<Document>, DocStoreError> {
        let url = format!("{}:runQuery", self.documents_url);
        let direction = match direction {
            SortDirection::Ascending => "ASCENDING",
            SortDirection::Descending => "DESCENDING",
        };
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection }],
                "orderBy": [{ "field": { "fieldPath": field }, "direction": direction }]
            }
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| DocStoreError::Request(e.to_string()))?;

        let items: Vec<RunQueryItem> = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| DocStoreError::Decode(e.to_string()))?;

        let documents = items
            .iter()
            .filter_map(|item| item.document.as_ref())
            .map(decode_document)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(collection, count = documents.len(), "Firestore query completed");
        Ok(documents)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), DocStoreError> {
        let url = self.document_url(collection, id)?;

        let response = self
            .http
            .delete(url)
            .query(&[("key", &self.api_key)])
            .send()
            .await
            .map_err(|e| DocStoreError::Request(e.to_string()))?;

        Self::check_status(response).await?;
        tracing::debug!(collection, id, "Firestore document deleted");
        Ok(())
    }
}
