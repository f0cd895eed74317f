//! Categories API server library.
//!
//! Exposes the building blocks (config, state, error handling, service,
//! routes) so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod html;
pub mod query;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
