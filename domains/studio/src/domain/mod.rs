//! Domain layer for the Studio domain

pub mod entities;
pub mod error;
pub mod workflows;
