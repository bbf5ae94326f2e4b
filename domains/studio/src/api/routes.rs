//! Route definitions for Studio domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{credits, generate};
use super::middleware::StudioState;

fn credit_routes() -> Router<StudioState> {
    Router::new()
        .route("/v1/credits", get(credits::get_credits))
        .route("/v1/credits/purchase", post(credits::purchase_credits))
}

fn generate_routes() -> Router<StudioState> {
    Router::new()
        .route("/v1/generate/image", post(generate::generate_image))
        .route("/v1/generate/code", post(generate::generate_code))
        .route("/v1/generate/palettes", post(generate::generate_palettes))
        .route("/v1/generate/employees", post(generate::generate_employees))
        .route("/v1/generate/tools", post(generate::generate_tools))
        .route("/v1/generate/api-schema", post(generate::generate_api_schema))
}

/// Create all Studio domain API routes
pub fn routes() -> Router<StudioState> {
    Router::new()
        .merge(credit_routes())
        .merge(generate_routes())
}
