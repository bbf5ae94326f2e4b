pub mod admin;
pub mod inventory;
