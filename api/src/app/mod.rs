//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and feed rendering.

pub mod bounty_filter;
pub mod feed_service;

pub use feed_service::FeedService;
