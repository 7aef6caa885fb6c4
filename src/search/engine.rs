//! Exhaustive minimum-cost route search.
//!
//! Explores every delivery route over the fixed network with a
//! depth-bounded depth-first search. The topology is small and
//! static, so brute force is tractable and finds the global optimum
//! within the depth bound; no cost-based pruning is applied — a
//! branch is only abandoned by the depth ceiling or by terminating.

use std::collections::BTreeSet;

use tracing::trace;

use crate::models::PickupSet;
use crate::network::Network;
use crate::pricing::TieredPricing;

/// Default recursion depth ceiling.
///
/// A safety valve bounding search cost on the static topology, not a
/// meaningful route-length limit; routes needing more steps are
/// treated as unreachable.
pub const DEFAULT_MAX_DEPTH: usize = 15;

/// One in-flight branch of the route search.
///
/// Every recursion clones the parent state, so sibling branches never
/// observe each other's pickup removals or visited marks.
#[derive(Debug, Clone)]
struct SearchState {
    node: usize,
    pickups: PickupSet,
    carried: f64,
    cost: f64,
    visited: BTreeSet<usize>,
    depth: usize,
}

/// Minimum-cost route search over a fixed network.
///
/// Launches one search tree per pickup center, each rooted with the
/// full pickup set. A branch picks up a center's pending weight on
/// arrival, drops all carried weight whenever it stands at the hub,
/// and terminates when it stands at the hub with no pickups
/// remaining; its accumulated cost then competes for the global
/// minimum.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::PickupSet;
/// use u_dispatch::network::Network;
/// use u_dispatch::pricing::TieredPricing;
/// use u_dispatch::search::RouteSearch;
///
/// let net = Network::from_links("L1", &[("C1", "L1", 3.0)]).expect("valid topology");
/// let pricing = TieredPricing::default();
///
/// let mut pickups = PickupSet::new();
/// pickups.add(net.node("C1").expect("exists"), 3.0);
///
/// let search = RouteSearch::new(&net, &pricing);
/// assert_eq!(search.minimum_cost(&pickups), Some(30.0));
/// ```
pub struct RouteSearch<'a> {
    network: &'a Network,
    pricing: &'a TieredPricing,
    max_depth: usize,
}

impl<'a> RouteSearch<'a> {
    /// Creates a search over the given network and pricing rule with
    /// the default depth ceiling.
    pub fn new(network: &'a Network, pricing: &'a TieredPricing) -> Self {
        Self {
            network,
            pricing,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the recursion depth ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Minimum total cost of delivering every pending pickup to the
    /// hub, or `None` if no complete route exists within the depth
    /// ceiling.
    ///
    /// Every pickup center roots its own tree over the full pickup
    /// set; the cheapest terminal branch across all trees wins. An
    /// empty pickup set has no roots and reports `None`.
    pub fn minimum_cost(&self, pickups: &PickupSet) -> Option<f64> {
        let mut best = f64::INFINITY;
        for root in pickups.centers() {
            let state = SearchState {
                node: root,
                pickups: pickups.clone(),
                carried: 0.0,
                cost: 0.0,
                visited: BTreeSet::new(),
                depth: 0,
            };
            self.explore(state, &mut best);
        }
        best.is_finite().then_some(best)
    }

    fn explore(&self, mut state: SearchState, best: &mut f64) {
        if state.depth > self.max_depth {
            return;
        }

        if let Some(weight) = state.pickups.take(state.node) {
            state.carried += weight;
            state.visited.insert(state.node);
        }

        if state.node == self.network.hub() {
            // All carried weight is consolidated at the hub.
            state.carried = 0.0;
            if state.pickups.is_empty() {
                if state.cost < *best {
                    *best = state.cost;
                }
                trace!(
                    cost = state.cost,
                    centers = state.visited.len(),
                    "complete route"
                );
                return;
            }
        }

        for &(next, distance) in self.network.neighbors(state.node) {
            let edge = self.pricing.edge_cost(distance, state.carried);
            let mut branch = state.clone();
            branch.node = next;
            branch.cost += edge;
            branch.depth += 1;
            self.explore(branch, best);
        }
    }
}
