//! The fixed weighted network of centers and the hub.
//!
//! Loaded once at startup from configuration and immutable for the
//! life of the process.

mod graph;

pub use graph::Network;
