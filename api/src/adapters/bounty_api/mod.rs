//! Bounty board API adapter

mod client;

pub use client::BountyApiClient;
