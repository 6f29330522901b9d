//! Domain types and pure helpers shared by the db and api crates.

pub mod error;
pub mod membership;
pub mod types;
pub mod uploads;
