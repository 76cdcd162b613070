//! Domain entities
//!
//! Core business objects of the bounty feed.

pub mod bounty;

pub use bounty::{Bounty, BountyRecord};
