//! TCP load generator: opens a configurable number of connections to a
//! target, repeatedly writes a fixed file payload over each one at a fixed
//! interval, and discards anything the peer sends back.

pub mod config;
pub mod worker;
