pub mod credits;
pub mod generate;
