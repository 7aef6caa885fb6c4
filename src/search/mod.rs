//! Route search over the fulfillment network.

mod engine;

pub use engine::{RouteSearch, DEFAULT_MAX_DEPTH};
