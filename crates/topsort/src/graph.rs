//! Keyed graph storage using petgraph.
//!
//! Nodes are identified by their key alone. Edges point from a dependent to
//! the node it depends on, so an edge `from -> to` places `to` before `from`
//! in the sorted output.

use crate::{NodeKey, Result};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Directed graph of keyed nodes.
///
/// The graph is built up through [`add_node`](Self::add_node) and
/// [`add_edge`](Self::add_edge) and then ordered with one of the sort entry
/// points. It is not meant to be mutated while a sort is running; build it
/// fully first.
#[derive(Debug, Clone)]
pub struct Graph<K: NodeKey> {
    /// The directed graph; node weights are the keys themselves.
    graph: DiGraph<K, ()>,
    /// Map from keys to node indices.
    key_to_node: HashMap<K, NodeIndex>,
}

impl<K: NodeKey> Graph<K> {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            key_to_node: HashMap::new(),
        }
    }

    /// Ensure `key` exists as a node.
    ///
    /// Does nothing if the node is already present.
    pub fn add_node(&mut self, key: K) {
        self.get_or_add_node(key);
    }

    fn get_or_add_node(&mut self, key: K) -> NodeIndex {
        if let Some(&node) = self.key_to_node.get(&key) {
            return node;
        }

        let node = self.graph.add_node(key.clone());
        debug!(?key, "Added graph node");
        self.key_to_node.insert(key, node);
        node
    }

    /// Record a directed edge `from -> to`, creating missing endpoints.
    ///
    /// Adding the same edge again leaves the graph unchanged.
    ///
    /// # Errors
    ///
    /// Currently infallible, but returns `Result` for API consistency.
    pub fn add_edge(&mut self, from: K, to: K) -> Result<(), K> {
        let from_node = self.get_or_add_node(from);
        let to_node = self.get_or_add_node(to);

        if self.graph.contains_edge(from_node, to_node) {
            trace!(
                from = ?self.graph[from_node],
                to = ?self.graph[to_node],
                "Edge already present"
            );
        } else {
            self.graph.add_edge(from_node, to_node, ());
            trace!(
                from = ?self.graph[from_node],
                to = ?self.graph[to_node],
                "Added graph edge"
            );
        }

        Ok(())
    }

    /// Check if a node exists in the graph.
    #[must_use]
    pub fn contains_node(&self, key: &K) -> bool {
        self.key_to_node.contains_key(key)
    }

    /// Check if the edge `from -> to` exists.
    #[must_use]
    pub fn contains_edge(&self, from: &K, to: &K) -> bool {
        match (self.key_to_node.get(from), self.key_to_node.get(to)) {
            (Some(&from), Some(&to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    /// Get the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of distinct edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Iterate over all node keys in the order they were first added.
    pub fn nodes(&self) -> impl Iterator<Item = &K> {
        self.graph.node_weights()
    }

    /// Outgoing edge targets of `key`.
    ///
    /// The enumeration order is whatever the storage yields and carries no
    /// meaning. A key that is not in the graph has no edges.
    pub fn edges<'a>(&'a self, key: &K) -> impl Iterator<Item = &'a K> + 'a {
        self.key_to_node
            .get(key)
            .into_iter()
            .flat_map(move |&node| self.graph.neighbors(node))
            .map(move |target| &self.graph[target])
    }

    /// Check if any cycle exists anywhere in the graph.
    ///
    /// Unlike the sort entry points this looks at every node, not only those
    /// reachable from a start key, and does not report the cycle's path.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}

impl<K: NodeKey> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}
