//! Designer portfolio API server library.
//!
//! Exposes the building blocks (config, storage bootstrap, state, error
//! handling, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod connect;
pub mod demo;
pub mod error;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
