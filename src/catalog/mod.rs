//! Product catalog: product → (owning center, unit weight).
//!
//! Resolves customer orders into pending pickup weights per center.

mod resolver;

pub use resolver::Catalog;
