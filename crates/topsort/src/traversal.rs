//! Depth-first topological ordering for keyed graphs.
//!
//! The sort is a post-order walk from a start key: a node is emitted only
//! after every node it has an edge to. The walk keeps two [`OrderedSet`]s,
//! the active path (ancestors of the node being explored) and the shared
//! results. Reaching a key that is already on the path is a cycle.
//!
//! The walk uses an explicit frame stack instead of recursion, so graph
//! depth is bounded by heap rather than call stack. Visit order, output and
//! reported cycles match a recursive walk that copies the path per descent.

use crate::{Cycle, Error, Graph, NodeKey, OrderedSet, Result};
use tracing::debug;

/// A topologically sorted sequence of keys.
///
/// Every key comes after all the keys it has edges to.
pub type TopologicalOrder<K> = Vec<K>;

/// Order in which a node's outgoing edges are explored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeOrder {
    /// Whatever order the graph storage enumerates edges in.
    ///
    /// Independent subtrees may be emitted in a different order than
    /// [`EdgeOrder::Sorted`] would produce.
    #[default]
    Unordered,
    /// Ascending natural order of the target keys.
    ///
    /// The output is reproducible across calls on an unchanged graph.
    Sorted,
}

/// Options for a single sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopSortOptions {
    /// Edge exploration order.
    pub edge_order: EdgeOrder,
    /// Descend again into nodes whose subtree already finished.
    ///
    /// Finished nodes cannot lead to a cycle that was not already reported,
    /// so skipping them does not change the output. Enabling this explores
    /// shared dependencies once per incoming path, which is exponential on
    /// stacked diamond shapes.
    pub revisit_finished: bool,
}

impl TopSortOptions {
    /// Options for a deterministic sort with sorted edge exploration.
    #[must_use]
    pub fn stable() -> Self {
        Self {
            edge_order: EdgeOrder::Sorted,
            ..Self::default()
        }
    }

    /// Set the edge exploration order.
    #[must_use]
    pub fn with_edge_order(mut self, edge_order: EdgeOrder) -> Self {
        self.edge_order = edge_order;
        self
    }

    /// Set whether finished subtrees are explored again.
    #[must_use]
    pub fn with_revisit_finished(mut self, revisit_finished: bool) -> Self {
        self.revisit_finished = revisit_finished;
        self
    }
}

/// A node being explored, with its remaining edge targets.
struct Frame<K> {
    key: K,
    edges: std::vec::IntoIter<K>,
}

impl<K: NodeKey> Graph<K> {
    /// Order every node reachable from `start`, dependencies first.
    ///
    /// The result includes `start` itself as its last element. Edges are
    /// explored in storage order, so nodes from independent subtrees may
    /// come out in any relative order. A `start` key that is not in the
    /// graph is treated as a node without edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] for the first cycle reached.
    pub fn top_sort(&self, start: &K) -> Result<TopologicalOrder<K>, K> {
        self.top_sort_with(start, TopSortOptions::default())
    }

    /// Like [`top_sort`](Self::top_sort), but explores edges in ascending
    /// key order so the result is the same on every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] for the first cycle reached.
    pub fn stable_top_sort(&self, start: &K) -> Result<TopologicalOrder<K>, K> {
        self.top_sort_with(start, TopSortOptions::stable())
    }

    /// Order every node reachable from `start` using explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] for the first cycle reached. No
    /// partial ordering is returned.
    pub fn top_sort_with(
        &self,
        start: &K,
        options: TopSortOptions,
    ) -> Result<TopologicalOrder<K>, K> {
        debug!(?start, ?options, "Starting topological sort");
        if !self.contains_node(start) {
            debug!(?start, "Start key not in graph, treating it as a leaf");
        }

        let results = self.visit(start, options).inspect_err(|err| {
            debug!(cycle = ?err.cycle().keys(), "Topological sort found a cycle");
        })?;

        debug!(?start, count = results.len(), "Topological sort finished");
        Ok(results.into_vec())
    }

    fn visit(&self, start: &K, options: TopSortOptions) -> Result<OrderedSet<K>, K> {
        let mut results = OrderedSet::new();
        let mut path = OrderedSet::new();
        let mut stack = Vec::new();

        path.insert(start.clone());
        stack.push(self.frame(start.clone(), options.edge_order));

        while let Some(frame) = stack.last_mut() {
            let Some(target) = frame.edges.next() else {
                // All children finished: emit in post-order.
                if let Some(done) = stack.pop() {
                    path.pop();
                    results.insert(done.key);
                }
                continue;
            };

            if let Some(ancestors) = path.slice_from(&target) {
                let mut keys = ancestors.to_vec();
                keys.push(target);
                return Err(Error::CycleDetected {
                    cycle: Cycle::new(keys),
                });
            }

            if !options.revisit_finished && results.contains(&target) {
                continue;
            }

            path.insert(target.clone());
            stack.push(self.frame(target, options.edge_order));
        }

        Ok(results)
    }

    fn frame(&self, key: K, edge_order: EdgeOrder) -> Frame<K> {
        let mut edges: Vec<K> = self.edges(&key).cloned().collect();
        if edge_order == EdgeOrder::Sorted {
            edges.sort();
        }
        Frame {
            key,
            edges: edges.into_iter(),
        }
    }
}
