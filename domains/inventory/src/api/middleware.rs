//! Inventory domain state and the admin passphrase gate

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use vibeforge_common::Error;

use crate::repository::ArtifactStore;

/// Header carrying the admin passphrase
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Application state for the Inventory domain
#[derive(Clone)]
pub struct InventoryState {
    pub store: Arc<ArtifactStore>,
}

impl FromRef<InventoryState> for Arc<ArtifactStore> {
    fn from_ref(state: &InventoryState) -> Self {
        state.store.clone()
    }
}

/// Proof that the request carried the current admin passphrase.
///
/// Rejects with 401 when the header is missing or does not match.
#[derive(Debug)]
pub struct AdminAccess;

impl<S> FromRequestParts<S> for AdminAccess
where
    Arc<ArtifactStore>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let store = Arc::<ArtifactStore>::from_ref(state);

        let candidate = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| Error::Authentication("Missing admin password".to_string()))?;

        let accepted = store
            .verify_admin_password(candidate)
            .map_err(|e| Error::Internal(e.to_string()))?;

        if !accepted {
            tracing::warn!("Rejected admin request with wrong password");
            return Err(Error::Authentication("Invalid admin password".to_string()));
        }

        Ok(AdminAccess)
    }
}
