//! Customer order type.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::OrderError;

/// A customer order: product identifiers mapped to requested
/// quantities.
///
/// Quantities are carried as raw `f64` values so that the "quantity
/// must be a non-negative integer" rule is enforced by the catalog
/// resolver rather than lost at parse time. Entries iterate in sorted
/// product order, which makes first-failure reporting reproducible.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Order;
///
/// let mut order = Order::new();
/// order.insert("A", 2.0);
/// assert_eq!(order.len(), 1);
/// assert_eq!(order.quantity("A"), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    entries: BTreeMap<String, f64>,
}

impl Order {
    /// Creates an empty order.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets the quantity for a product, replacing any previous value.
    pub fn insert(&mut self, product: &str, quantity: f64) {
        self.entries.insert(product.to_string(), quantity);
    }

    /// Returns the quantity for a product, if present.
    pub fn quantity(&self, product: &str) -> Option<f64> {
        self.entries.get(product).copied()
    }

    /// Number of distinct products in this order.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the order has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(product, quantity)` entries in product order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(p, &q)| (p.as_str(), q))
    }

    /// Builds an order from a loosely typed JSON value.
    ///
    /// Fails with [`OrderError::InvalidOrderFormat`] unless the value
    /// is a JSON object, and with [`OrderError::InvalidQuantity`] for
    /// any entry whose value is not a number. Integer and sign checks
    /// happen later, during catalog resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use u_dispatch::models::Order;
    ///
    /// let order = Order::from_json_value(&json!({"A": 2, "G": 1})).expect("object body");
    /// assert_eq!(order.len(), 2);
    /// assert!(Order::from_json_value(&json!([1, 2])).is_err());
    /// ```
    pub fn from_json_value(value: &Value) -> Result<Self, OrderError> {
        let map = value.as_object().ok_or(OrderError::InvalidOrderFormat)?;
        let mut order = Order::new();
        for (product, quantity) in map {
            let q = quantity
                .as_f64()
                .ok_or_else(|| OrderError::InvalidQuantity(product.clone()))?;
            order.insert(product, q);
        }
        Ok(order)
    }
}
