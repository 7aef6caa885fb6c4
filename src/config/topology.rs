//! Topology configuration document.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::network::Network;

/// One undirected link between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Link distance, finite and positive.
    pub distance: f64,
}

/// One product with its owning center and unit weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    /// Product identifier as used in orders.
    pub id: String,
    /// Name of the center sourcing this product.
    pub center: String,
    /// Shipment weight of a single unit.
    pub unit_weight: f64,
}

/// The full static topology: network links, hub, and product catalog.
///
/// Loaded once at startup and immutable afterwards. `Default` is the
/// built-in three-center topology; deployments can supply a JSON
/// document instead.
///
/// # Examples
///
/// ```
/// use u_dispatch::config::TopologyConfig;
///
/// let config = TopologyConfig::from_json(
///     r#"{
///         "hub": "H",
///         "links": [{ "from": "C", "to": "H", "distance": 1.0 }],
///         "products": [{ "id": "P", "center": "C", "unit_weight": 2.0 }]
///     }"#,
/// )
/// .expect("valid document");
/// let (network, catalog) = config.build().expect("valid topology");
/// assert_eq!(network.len(), 2);
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// Name of the consolidation hub node.
    pub hub: String,
    /// Undirected weighted links of the network.
    pub links: Vec<LinkConfig>,
    /// Product catalog entries.
    pub products: Vec<ProductConfig>,
}

impl TopologyConfig {
    /// Parses a configuration document from JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    /// Builds the immutable network and catalog from this document.
    ///
    /// Link and hub invariants are checked by [`Network::from_links`];
    /// every product's center is then resolved against the network
    /// before it is admitted to the catalog.
    pub fn build(&self) -> Result<(Network, Catalog), ConfigError> {
        let links: Vec<(&str, &str, f64)> = self
            .links
            .iter()
            .map(|link| (link.from.as_str(), link.to.as_str(), link.distance))
            .collect();
        let network = Network::from_links(&self.hub, &links)?;

        let mut catalog = Catalog::new();
        for product in &self.products {
            let center =
                network
                    .node(&product.center)
                    .ok_or_else(|| ConfigError::UnknownCenter {
                        product: product.id.clone(),
                        center: product.center.clone(),
                    })?;
            catalog.add_product(&product.id, center, product.unit_weight)?;
        }
        Ok((network, catalog))
    }
}

impl Default for TopologyConfig {
    /// The built-in three-center topology around hub `L1`.
    fn default() -> Self {
        let links = [
            ("C1", "C2", 4.0),
            ("C1", "L1", 3.0),
            ("C2", "L1", 2.5),
            ("C2", "C3", 3.0),
            ("C3", "L1", 2.0),
        ];
        let products = [
            ("A", "C1", 3.0),
            ("B", "C1", 2.0),
            ("C", "C1", 8.0),
            ("D", "C2", 12.0),
            ("E", "C2", 25.0),
            ("F", "C2", 15.0),
            ("G", "C3", 0.5),
            ("H", "C3", 1.0),
            ("I", "C3", 2.0),
        ];
        Self {
            hub: "L1".to_string(),
            links: links
                .iter()
                .map(|&(from, to, distance)| LinkConfig {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                })
                .collect(),
            products: products
                .iter()
                .map(|&(id, center, unit_weight)| ProductConfig {
                    id: id.to_string(),
                    center: center.to_string(),
                    unit_weight,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_topology_builds() {
        let (network, catalog) = TopologyConfig::default().build().expect("valid topology");
        assert_eq!(network.len(), 4);
        assert_eq!(network.name(network.hub()), "L1");
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.owner_of("A"), network.node("C1"));
        assert_eq!(catalog.owner_of("E"), network.node("C2"));
        assert_eq!(catalog.unit_weight("G"), Some(0.5));
    }

    #[test]
    fn test_from_json_valid() {
        let config = TopologyConfig::from_json(
            r#"{
                "hub": "H",
                "links": [
                    { "from": "A", "to": "H", "distance": 1.5 },
                    { "from": "B", "to": "H", "distance": 2.0 }
                ],
                "products": [
                    { "id": "P1", "center": "A", "unit_weight": 1.0 },
                    { "id": "P2", "center": "B", "unit_weight": 4.0 }
                ]
            }"#,
        )
        .expect("valid document");
        assert_eq!(config.hub, "H");
        assert_eq!(config.links.len(), 2);
        assert_eq!(config.products.len(), 2);
        let (network, catalog) = config.build().expect("valid topology");
        assert_eq!(network.len(), 3);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            TopologyConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            TopologyConfig::from_json(r#"{"hub": "H"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_build_unknown_center() {
        let mut config = TopologyConfig::default();
        config.products.push(ProductConfig {
            id: "X".to_string(),
            center: "C9".to_string(),
            unit_weight: 1.0,
        });
        assert_eq!(
            config.build().unwrap_err(),
            ConfigError::UnknownCenter {
                product: "X".to_string(),
                center: "C9".to_string(),
            }
        );
    }

    #[test]
    fn test_build_duplicate_product() {
        let mut config = TopologyConfig::default();
        config.products.push(ProductConfig {
            id: "A".to_string(),
            center: "C2".to_string(),
            unit_weight: 1.0,
        });
        assert_eq!(
            config.build().unwrap_err(),
            ConfigError::DuplicateProduct("A".to_string())
        );
    }

    #[test]
    fn test_build_bad_link() {
        let mut config = TopologyConfig::default();
        config.links[0].distance = -1.0;
        assert!(matches!(
            config.build(),
            Err(ConfigError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = TopologyConfig::default();
        let text = serde_json::to_string(&config).expect("serializable");
        let parsed = TopologyConfig::from_json(&text).expect("parseable");
        assert_eq!(parsed, config);
    }
}
