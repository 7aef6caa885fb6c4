//! Per-edge cost function.
//!
//! Prices a single link traversal from its distance and the weight
//! carried across it.

mod tiered;

pub use tiered::{TieredPricing, BASE_RATE, SURCHARGE_RATE, TIER_WEIGHT};
