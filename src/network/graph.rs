//! Fixed fulfillment network.

use std::collections::HashMap;

use crate::error::ConfigError;

/// The static network of fulfillment centers and the consolidation
/// hub.
///
/// Nodes are referred to by name at construction and by dense index
/// afterwards. Links are undirected with a positive distance. The
/// network is validated once at construction and immutable
/// thereafter: every node must be able to reach the hub.
///
/// # Examples
///
/// ```
/// use u_dispatch::network::Network;
///
/// let net = Network::from_links(
///     "L1",
///     &[("C1", "L1", 3.0), ("C2", "L1", 2.5), ("C1", "C2", 4.0)],
/// )
/// .expect("valid topology");
/// assert_eq!(net.len(), 3);
/// assert_eq!(net.name(net.hub()), "L1");
/// assert_eq!(net.neighbors(net.hub()).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    names: Vec<String>,
    indices: HashMap<String, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    hub: usize,
}

impl Network {
    /// Builds a network from undirected weighted links.
    ///
    /// Each `(a, b, distance)` entry links `a` and `b` in both
    /// directions. Fails if a distance is not finite and positive, a
    /// link repeats an earlier pair or connects a node to itself, the
    /// hub never appears, or some node cannot reach the hub.
    pub fn from_links(hub: &str, links: &[(&str, &str, f64)]) -> Result<Self, ConfigError> {
        fn intern(
            name: &str,
            names: &mut Vec<String>,
            indices: &mut HashMap<String, usize>,
            adjacency: &mut Vec<Vec<(usize, f64)>>,
        ) -> usize {
            if let Some(&idx) = indices.get(name) {
                return idx;
            }
            let idx = names.len();
            names.push(name.to_string());
            indices.insert(name.to_string(), idx);
            adjacency.push(Vec::new());
            idx
        }

        let mut names = Vec::new();
        let mut indices = HashMap::new();
        let mut adjacency: Vec<Vec<(usize, f64)>> = Vec::new();

        for &(a, b, distance) in links {
            if !distance.is_finite() || distance <= 0.0 {
                return Err(ConfigError::InvalidDistance {
                    from: a.to_string(),
                    to: b.to_string(),
                    distance,
                });
            }
            if a == b {
                return Err(ConfigError::SelfLink(a.to_string()));
            }
            let ia = intern(a, &mut names, &mut indices, &mut adjacency);
            let ib = intern(b, &mut names, &mut indices, &mut adjacency);
            if adjacency[ia].iter().any(|&(n, _)| n == ib) {
                return Err(ConfigError::DuplicateLink {
                    from: a.to_string(),
                    to: b.to_string(),
                });
            }
            adjacency[ia].push((ib, distance));
            adjacency[ib].push((ia, distance));
        }

        let hub = *indices
            .get(hub)
            .ok_or_else(|| ConfigError::UnknownHub(hub.to_string()))?;

        let net = Self {
            names,
            indices,
            adjacency,
            hub,
        };
        net.check_connected()?;
        Ok(net)
    }

    /// Every node must reach the hub; links are undirected, so one
    /// traversal from the hub covers both directions.
    fn check_connected(&self) -> Result<(), ConfigError> {
        let mut seen = vec![false; self.names.len()];
        let mut frontier = vec![self.hub];
        seen[self.hub] = true;
        while let Some(node) = frontier.pop() {
            for &(next, _) in &self.adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    frontier.push(next);
                }
            }
        }
        match seen.iter().position(|&s| !s) {
            Some(idx) => Err(ConfigError::UnreachableNode(self.names[idx].clone())),
            None => Ok(()),
        }
    }

    /// Index of the consolidation hub.
    pub fn hub(&self) -> usize {
        self.hub
    }

    /// Looks up a node index by name.
    pub fn node(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Name of the node at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// Neighbors of a node with their link distances.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn neighbors(&self, idx: usize) -> &[(usize, f64)] {
        &self.adjacency[idx]
    }

    /// Returns `true` if a node with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Number of nodes in the network.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
