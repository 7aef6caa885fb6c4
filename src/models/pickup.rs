//! Pending pickup weights per center.

use std::collections::BTreeMap;

/// The pending pickup weight owed by each center for one order.
///
/// Keys are network node indices. Centers with nothing to pick up are
/// absent. The route search clones this per branch and consumes
/// entries as centers are visited, so sibling branches never observe
/// each other's removals.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::PickupSet;
///
/// let mut pickups = PickupSet::new();
/// pickups.add(0, 3.0);
/// pickups.add(0, 2.0);
/// pickups.add(2, 0.5);
/// assert_eq!(pickups.weight_at(0), Some(5.0));
/// assert_eq!(pickups.take(0), Some(5.0));
/// assert_eq!(pickups.weight_at(0), None);
/// assert!(!pickups.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickupSet {
    weights: BTreeMap<usize, f64>,
}

impl PickupSet {
    /// Creates an empty pickup set.
    pub fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Adds weight to a center's pending total.
    pub fn add(&mut self, center: usize, weight: f64) {
        *self.weights.entry(center).or_insert(0.0) += weight;
    }

    /// Removes and returns a center's pending weight.
    pub fn take(&mut self, center: usize) -> Option<f64> {
        self.weights.remove(&center)
    }

    /// Pending weight at a center, if any.
    pub fn weight_at(&self, center: usize) -> Option<f64> {
        self.weights.get(&center).copied()
    }

    /// Returns `true` when no pickups remain.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of centers with pending pickups.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Iterates over centers with pending pickups, in index order.
    pub fn centers(&self) -> impl Iterator<Item = usize> + '_ {
        self.weights.keys().copied()
    }

    /// Sum of all pending weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }
}
