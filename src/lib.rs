//! BookHunt - personal library tracker
//!
//! This library crate exposes the shells' building blocks for integration
//! testing: configuration loading, terminal listing, and the HTTP router.

pub mod config;
pub mod listing;
pub mod server;
