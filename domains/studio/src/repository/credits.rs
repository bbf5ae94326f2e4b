//! Credit ledger backed by the local key-value store

use std::sync::Arc;

use tokio::sync::Mutex;
use vibeforge_common::KeyValueStore;

use crate::domain::entities::{Tier, UserCredits};
use crate::domain::error::StudioError;

pub const CREDITS_KEY: &str = "vibe_credits";

/// Reads and updates `UserCredits`, one read-modify-write at a time.
pub struct CreditLedger {
    kv: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl CreditLedger {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kv,
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<UserCredits, StudioError> {
        match self.kv.get(CREDITS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(UserCredits::default()),
        }
    }

    fn store(&self, credits: &UserCredits) -> Result<(), StudioError> {
        self.kv.set(CREDITS_KEY, &serde_json::to_string(credits)?)?;
        Ok(())
    }

    pub async fn balance(&self) -> Result<UserCredits, StudioError> {
        let _guard = self.lock.lock().await;
        self.load()
    }

    pub async fn purchase(&self, tier: Tier, amount: u32) -> Result<UserCredits, StudioError> {
        let _guard = self.lock.lock().await;
        let mut credits = self.load()?;
        credits.add(tier, amount);
        self.store(&credits)?;

        tracing::info!(%tier, amount, price = tier.purchase_price(), "Credits purchased");
        Ok(credits)
    }

    /// Spend one credit of `tier`. Fails without touching the balance at zero.
    pub async fn deduct(&self, tier: Tier) -> Result<UserCredits, StudioError> {
        let _guard = self.lock.lock().await;
        let mut credits = self.load()?;
        if !credits.take_one(tier) {
            tracing::warn!(%tier, "Insufficient credits");
            return Err(StudioError::InsufficientCredits(tier));
        }
        self.store(&credits)?;
        Ok(credits)
    }

    /// Give back one credit of `tier` after a failed generation.
    pub async fn refund(&self, tier: Tier) -> Result<UserCredits, StudioError> {
        let _guard = self.lock.lock().await;
        let mut credits = self.load()?;
        credits.add(tier, 1);
        self.store(&credits)?;

        tracing::info!(%tier, "Credit refunded");
        Ok(credits)
    }
}
