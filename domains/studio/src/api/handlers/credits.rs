//! Credit balance API handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use vibeforge_common::{Result, ValidatedJson};
use validator::Validate;

use crate::api::middleware::StudioState;
use crate::domain::entities::{Tier, UserCredits};

#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseRequest {
    pub tier: Tier,

    #[validate(range(min = 1, max = 1000, message = "Amount must be between 1 and 1000"))]
    pub amount: u32,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub credits: UserCredits,
    /// Displayed price of the purchase in dollars; no payment is taken
    pub price: f64,
}

pub async fn get_credits(State(state): State<StudioState>) -> Result<Json<UserCredits>> {
    Ok(Json(state.studio.ledger().balance().await?))
}

pub async fn purchase_credits(
    State(state): State<StudioState>,
    ValidatedJson(req): ValidatedJson<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>> {
    let credits = state.studio.ledger().purchase(req.tier, req.amount).await?;
    Ok(Json(PurchaseResponse {
        credits,
        price: req.tier.purchase_price(),
    }))
}
