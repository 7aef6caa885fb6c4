//! Tiered per-edge pricing.

/// Default cost per unit distance for the first weight tier.
pub const BASE_RATE: f64 = 10.0;

/// Default additional cost per unit distance for each extra tier.
pub const SURCHARGE_RATE: f64 = 8.0;

/// Default tier size in weight units.
pub const TIER_WEIGHT: f64 = 5.0;

/// Piecewise-linear edge pricing: a base rate covers the first tier
/// of carried weight, and each further tier adds a surcharge, with
/// partial tiers billed in full.
///
/// With the default rates, carrying up to 5 weight units over one
/// unit of distance costs 10.0; every extra 5 units (or part thereof)
/// adds 8.0 per unit of distance.
///
/// # Examples
///
/// ```
/// use u_dispatch::pricing::TieredPricing;
///
/// let pricing = TieredPricing::default();
/// assert_eq!(pricing.edge_cost(1.0, 5.0), 10.0);
/// assert_eq!(pricing.edge_cost(1.0, 10.0), 18.0);
/// assert_eq!(pricing.edge_cost(1.0, 10.01), 26.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TieredPricing {
    base_rate: f64,
    surcharge_rate: f64,
    tier_weight: f64,
}

impl TieredPricing {
    /// Creates a pricing rule with custom rates.
    ///
    /// Returns `None` if the base rate or tier size is not finite and
    /// positive, or the surcharge is not finite and non-negative.
    pub fn new(base_rate: f64, surcharge_rate: f64, tier_weight: f64) -> Option<Self> {
        if !base_rate.is_finite() || base_rate <= 0.0 {
            return None;
        }
        if !surcharge_rate.is_finite() || surcharge_rate < 0.0 {
            return None;
        }
        if !tier_weight.is_finite() || tier_weight <= 0.0 {
            return None;
        }
        Some(Self {
            base_rate,
            surcharge_rate,
            tier_weight,
        })
    }

    /// Cost per unit distance for the first weight tier.
    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Additional cost per unit distance per extra weight tier.
    pub fn surcharge_rate(&self) -> f64 {
        self.surcharge_rate
    }

    /// Tier size in weight units.
    pub fn tier_weight(&self) -> f64 {
        self.tier_weight
    }

    /// Monetary cost of carrying `weight` over one link of length
    /// `distance`.
    ///
    /// Inputs are expected to be non-negative; the pickup set and
    /// network guarantee this by construction.
    pub fn edge_cost(&self, distance: f64, weight: f64) -> f64 {
        let excess = (weight - self.tier_weight).max(0.0);
        let tiers = (excess / self.tier_weight).ceil();
        distance * self.base_rate + tiers * distance * self.surcharge_rate
    }
}

impl Default for TieredPricing {
    fn default() -> Self {
        Self {
            base_rate: BASE_RATE,
            surcharge_rate: SURCHARGE_RATE,
            tier_weight: TIER_WEIGHT,
        }
    }
}
