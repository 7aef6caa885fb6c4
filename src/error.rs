//! Error types for configuration and order processing.

use thiserror::Error;

/// Errors raised while building the static network and catalog.
///
/// These surface at process start, before any order is accepted, and
/// indicate a broken topology or catalog definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A link distance was zero, negative, or non-finite.
    #[error("invalid distance {distance} on link {from}-{to}")]
    InvalidDistance {
        /// First endpoint of the offending link.
        from: String,
        /// Second endpoint of the offending link.
        to: String,
        /// The rejected distance value.
        distance: f64,
    },
    /// A link connects a node to itself.
    #[error("self-link on node {0}")]
    SelfLink(String),
    /// The same pair of nodes was linked more than once.
    #[error("duplicate link {from}-{to}")]
    DuplicateLink {
        /// First endpoint of the repeated link.
        from: String,
        /// Second endpoint of the repeated link.
        to: String,
    },
    /// The designated hub does not appear in any link.
    #[error("unknown hub {0}")]
    UnknownHub(String),
    /// A node has no path to the hub.
    #[error("node {0} cannot reach the hub")]
    UnreachableNode(String),
    /// A product references a center that is not in the network.
    #[error("product {product} references unknown center {center}")]
    UnknownCenter {
        /// The product being registered.
        product: String,
        /// The missing center name.
        center: String,
    },
    /// The same product id was declared twice.
    #[error("duplicate product {0}")]
    DuplicateProduct(String),
    /// A product unit weight was zero, negative, or non-finite.
    #[error("invalid unit weight {weight} for product {product}")]
    InvalidWeight {
        /// The product being registered.
        product: String,
        /// The rejected weight value.
        weight: f64,
    },
    /// The configuration document could not be parsed.
    #[error("unparseable configuration: {0}")]
    Parse(String),
}

/// Errors raised while validating a customer order.
///
/// All variants are recoverable: the caller fixes the order and
/// retries. The wire messages match what callers of the quoting
/// endpoint expect verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// The order body is not a mapping of product to quantity.
    #[error("Invalid order format")]
    InvalidOrderFormat,
    /// The order references a product that is not in the catalog.
    #[error("Invalid product: {0}")]
    UnknownProduct(String),
    /// A quantity is not a non-negative integer.
    #[error("Invalid quantity for {0}")]
    InvalidQuantity(String),
    /// An unexpected internal failure; no detail is exposed.
    #[error("Internal server error")]
    Internal,
}
