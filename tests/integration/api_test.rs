//! API endpoint integration tests
//!
//! Drives the composed router for the inventory, admin and studio endpoints.

#![allow(dead_code)]

mod admin;
mod common;
mod inventory;
mod studio;
