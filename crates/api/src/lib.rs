//! Club site server library.
//!
//! Exposes the building blocks (config, state, sessions, routes, views) so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
pub mod upload;
pub mod views;
