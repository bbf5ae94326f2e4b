//! API layer for the Studio domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::StudioState;
pub use routes::routes;
