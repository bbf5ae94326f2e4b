//! Studio domain state

use std::sync::Arc;

use crate::Studio;

/// Application state for the Studio domain
#[derive(Clone)]
pub struct StudioState {
    pub studio: Arc<Studio>,
}
