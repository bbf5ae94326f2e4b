//! Domain layer for the Inventory domain

pub mod entities;
