//! Dispatch service tying resolution, pricing, and search together.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::config::TopologyConfig;
use crate::error::{ConfigError, OrderError};
use crate::models::Order;
use crate::network::Network;
use crate::pricing::TieredPricing;
use crate::search::{RouteSearch, DEFAULT_MAX_DEPTH};

/// A quoted delivery cost.
///
/// Serializes as `{"cost": <number>}`. A cost of `0.0` is a valid,
/// meaningful result: the order required no pickups, or no complete
/// route exists within the search depth ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    /// Minimum total delivery cost for the order.
    pub cost: f64,
}

/// Stateless delivery quoting service over a fixed topology.
///
/// Owns the immutable network, catalog, and pricing rule. Each call
/// to [`quote`](DispatchService::quote) is an independent,
/// deterministic computation; nothing is shared or carried between
/// requests, so concurrent callers need no synchronization beyond a
/// shared reference.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Order;
/// use u_dispatch::service::DispatchService;
///
/// let service = DispatchService::default();
/// let mut order = Order::new();
/// order.insert("A", 1.0);
/// let quote = service.quote(&order).expect("valid order");
/// assert_eq!(quote.cost, 30.0);
/// ```
#[derive(Debug, Clone)]
pub struct DispatchService {
    network: Network,
    catalog: Catalog,
    pricing: TieredPricing,
    max_depth: usize,
}

impl DispatchService {
    /// Creates a service from pre-built parts.
    pub fn new(network: Network, catalog: Catalog, pricing: TieredPricing) -> Self {
        Self {
            network,
            catalog,
            pricing,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates a service from a topology configuration document, with
    /// default pricing.
    pub fn from_config(config: &TopologyConfig) -> Result<Self, ConfigError> {
        let (network, catalog) = config.build()?;
        Ok(Self::new(network, catalog, TieredPricing::default()))
    }

    /// Overrides the search depth ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The network this service quotes over.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The catalog this service resolves orders against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Quotes the minimum delivery cost for an order.
    ///
    /// Validation fails fast on the first invalid entry. An order
    /// with nothing to deliver, or whose pickups admit no complete
    /// route within the depth ceiling, quotes `0.0`.
    pub fn quote(&self, order: &Order) -> Result<Quote, OrderError> {
        let pickups = self.catalog.resolve(order).map_err(|err| {
            warn!(%err, "order rejected");
            err
        })?;
        let search = RouteSearch::new(&self.network, &self.pricing).with_max_depth(self.max_depth);
        let cost = search.minimum_cost(&pickups).unwrap_or(0.0);
        debug!(cost, products = order.len(), "quote computed");
        Ok(Quote { cost })
    }

    /// Quotes from a loosely typed JSON order body.
    ///
    /// The body must be a JSON object mapping product identifiers to
    /// numeric quantities; see [`Order::from_json_value`] for the
    /// shape errors.
    pub fn quote_value(&self, body: &Value) -> Result<Quote, OrderError> {
        let order = Order::from_json_value(body).map_err(|err| {
            warn!(%err, "malformed order body");
            err
        })?;
        self.quote(&order)
    }
}

impl Default for DispatchService {
    /// Service over the built-in topology with default pricing.
    fn default() -> Self {
        let (network, catalog) = TopologyConfig::default()
            .build()
            .expect("built-in topology is valid");
        Self::new(network, catalog, TieredPricing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn order(entries: &[(&str, f64)]) -> Order {
        let mut order = Order::new();
        for &(product, quantity) in entries {
            order.insert(product, quantity);
        }
        order
    }

    #[test]
    fn test_quote_single_product() {
        let service = DispatchService::default();
        let quote = service.quote(&order(&[("A", 1.0)])).expect("valid order");
        assert!((quote.cost - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_quote_empty_order_is_zero() {
        let service = DispatchService::default();
        let quote = service.quote(&Order::new()).expect("valid order");
        assert_eq!(quote.cost, 0.0);
    }

    #[test]
    fn test_quote_zero_quantities_is_zero() {
        let service = DispatchService::default();
        let quote = service
            .quote(&order(&[("A", 0.0), ("G", 0.0)]))
            .expect("valid order");
        assert_eq!(quote.cost, 0.0);
    }

    #[test]
    fn test_quote_two_centers() {
        let service = DispatchService::default();
        // A at C1 (3.0) and G at C3 (0.5); cheapest route funnels C1
        // through the hub, then collects C3: 30 + 20 + 20.
        let quote = service
            .quote(&order(&[("A", 1.0), ("G", 1.0)]))
            .expect("valid order");
        assert!((quote.cost - 70.0).abs() < 1e-10);
    }

    #[test]
    fn test_quote_surcharge_order() {
        let service = DispatchService::default();
        // C weighs 8.0: one tier over on C1 -> L1.
        let quote = service.quote(&order(&[("C", 1.0)])).expect("valid order");
        assert!((quote.cost - 54.0).abs() < 1e-10);
    }

    #[test]
    fn test_quote_unknown_product() {
        let service = DispatchService::default();
        assert_eq!(
            service.quote(&order(&[("Z", 1.0)])),
            Err(OrderError::UnknownProduct("Z".to_string()))
        );
    }

    #[test]
    fn test_quote_invalid_quantity() {
        let service = DispatchService::default();
        assert_eq!(
            service.quote(&order(&[("A", -2.0)])),
            Err(OrderError::InvalidQuantity("A".to_string()))
        );
        assert_eq!(
            service.quote(&order(&[("A", 1.5)])),
            Err(OrderError::InvalidQuantity("A".to_string()))
        );
    }

    #[test]
    fn test_quote_value_object_body() {
        let service = DispatchService::default();
        let quote = service.quote_value(&json!({"A": 1})).expect("valid body");
        assert!((quote.cost - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_quote_value_rejects_non_object() {
        let service = DispatchService::default();
        assert_eq!(
            service.quote_value(&json!([["A", 1]])),
            Err(OrderError::InvalidOrderFormat)
        );
        assert_eq!(
            service.quote_value(&json!(42)),
            Err(OrderError::InvalidOrderFormat)
        );
    }

    #[test]
    fn test_quote_value_rejects_non_numeric_quantity() {
        let service = DispatchService::default();
        assert_eq!(
            service.quote_value(&json!({"A": "1"})),
            Err(OrderError::InvalidQuantity("A".to_string()))
        );
    }

    #[test]
    fn test_quote_serializes_as_cost() {
        let quote = Quote { cost: 30.0 };
        assert_eq!(
            serde_json::to_value(quote).expect("serializable"),
            json!({"cost": 30.0})
        );
    }

    #[test]
    fn test_from_config_matches_default() {
        let service = DispatchService::from_config(&TopologyConfig::default()).expect("valid");
        let quote = service.quote(&order(&[("A", 1.0)])).expect("valid order");
        assert!((quote.cost - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_quote_with_tiny_depth_reports_zero() {
        // Depth 0 admits no travel at all, so the only outcome is
        // "no route found", reported as a zero-cost quote.
        let service = DispatchService::default().with_max_depth(0);
        let quote = service.quote(&order(&[("A", 1.0)])).expect("valid order");
        assert_eq!(quote.cost, 0.0);
    }

    #[test]
    fn test_accessors() {
        let service = DispatchService::default();
        assert_eq!(service.network().len(), 4);
        assert_eq!(service.catalog().len(), 9);
    }

    proptest! {
        #[test]
        fn prop_quote_deterministic(
            a in 0u32..4,
            d in 0u32..4,
            g in 0u32..4,
        ) {
            let service = DispatchService::default();
            let order = order(&[("A", a as f64), ("D", d as f64), ("G", g as f64)]);
            let first = service.quote(&order).expect("valid order");
            let second = service.quote(&order).expect("valid order");
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_quote_non_negative_and_finite(
            b in 0u32..6,
            e in 0u32..3,
            h in 0u32..6,
        ) {
            let service = DispatchService::default();
            let order = order(&[("B", b as f64), ("E", e as f64), ("H", h as f64)]);
            let quote = service.quote(&order).expect("valid order");
            prop_assert!(quote.cost >= 0.0);
            prop_assert!(quote.cost.is_finite());
        }
    }
}
