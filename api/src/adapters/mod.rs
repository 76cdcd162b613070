//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod bounty_api;

pub use bounty_api::BountyApiClient;
