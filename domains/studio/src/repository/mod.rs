//! Repository layer for the Studio domain

pub mod credits;

pub use credits::{CreditLedger, CREDITS_KEY};
