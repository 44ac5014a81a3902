//! Movies API server library.
//!
//! Exposes the building blocks (config, state, error handling, extractors,
//! routes, router assembly) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
