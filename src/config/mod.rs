//! Static topology configuration.
//!
//! The network and catalog are configuration data: loaded once at
//! startup, validated, and immutable for the life of the process. A
//! built-in topology is provided as `Default`; deployments may
//! instead supply a JSON document.

mod topology;

pub use topology::{LinkConfig, ProductConfig, TopologyConfig};
