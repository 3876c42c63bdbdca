pub mod common;
pub mod health;
pub mod location_analysis;
