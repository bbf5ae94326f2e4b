//! Shared utilities, configuration, and error handling for VibeForge
//!
//! This crate provides common functionality used across the VibeForge application:
//! - Configuration management following 12-factor principles
//! - Error types and HTTP error responses
//! - The local key-value store that backs browser-style persisted state
//! - Request extractors

pub mod config;
pub mod error;
pub mod extractors;
pub mod kv;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
pub use kv::{FileKeyValueStore, KeyValueStore, KvError, MemoryKeyValueStore};
