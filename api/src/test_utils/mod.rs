//! In-memory bounty sources and bounty builders shared by the unit and
//! router tests. The sources implement `BountySource` directly, so no test
//! needs a live bounty board.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
