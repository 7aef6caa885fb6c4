//! Product catalog and order resolution.

use std::collections::HashMap;

use crate::error::{ConfigError, OrderError};
use crate::models::{Order, PickupSet};

/// One product's sourcing data.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProductSpec {
    center: usize,
    unit_weight: f64,
}

/// Static catalog mapping each product to its owning center and unit
/// shipment weight.
///
/// Center values are network node indices; the configuration layer
/// validates them against the network before registration. The
/// catalog is immutable once the service starts taking orders.
///
/// # Examples
///
/// ```
/// use u_dispatch::catalog::Catalog;
/// use u_dispatch::models::Order;
///
/// let mut catalog = Catalog::new();
/// catalog.add_product("A", 0, 3.0).expect("valid product");
///
/// let mut order = Order::new();
/// order.insert("A", 2.0);
/// let pickups = catalog.resolve(&order).expect("valid order");
/// assert_eq!(pickups.weight_at(0), Some(6.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, ProductSpec>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Registers a product sourced from the given center index.
    ///
    /// Fails if the product id is already registered or the unit
    /// weight is not finite and positive.
    pub fn add_product(
        &mut self,
        id: &str,
        center: usize,
        unit_weight: f64,
    ) -> Result<(), ConfigError> {
        if !unit_weight.is_finite() || unit_weight <= 0.0 {
            return Err(ConfigError::InvalidWeight {
                product: id.to_string(),
                weight: unit_weight,
            });
        }
        if self.products.contains_key(id) {
            return Err(ConfigError::DuplicateProduct(id.to_string()));
        }
        self.products
            .insert(id.to_string(), ProductSpec { center, unit_weight });
        Ok(())
    }

    /// Center index owning the given product.
    pub fn owner_of(&self, product: &str) -> Option<usize> {
        self.products.get(product).map(|spec| spec.center)
    }

    /// Unit weight of the given product.
    pub fn unit_weight(&self, product: &str) -> Option<f64> {
        self.products.get(product).map(|spec| spec.unit_weight)
    }

    /// Number of registered products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if no products are registered.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Resolves an order into pending pickup weights per center.
    ///
    /// Validates entries in the order's iteration order and stops at
    /// the first failure: the product must exist in the catalog and
    /// the quantity must be a finite non-negative integer value.
    /// Entries that contribute no weight leave their center absent
    /// from the result, so an all-zero order resolves to an empty
    /// pickup set.
    pub fn resolve(&self, order: &Order) -> Result<PickupSet, OrderError> {
        let mut pickups = PickupSet::new();
        for (product, quantity) in order.entries() {
            let spec = self
                .products
                .get(product)
                .ok_or_else(|| OrderError::UnknownProduct(product.to_string()))?;
            if !quantity.is_finite() || quantity < 0.0 || quantity.fract() != 0.0 {
                return Err(OrderError::InvalidQuantity(product.to_string()));
            }
            let weight = spec.unit_weight * quantity;
            if weight > 0.0 {
                pickups.add(spec.center, weight);
            }
        }
        Ok(pickups)
    }
}
