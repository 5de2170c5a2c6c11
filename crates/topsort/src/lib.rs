//! Keyed directed graphs with depth-first topological ordering.
//!
//! This crate provides a small in-memory graph whose nodes are identified
//! solely by caller-supplied keys, and a post-order depth-first sort that
//! orders every node reachable from a start key after all of its
//! dependencies, or reports the first cycle it runs into.
//!
//! # Key Types
//!
//! - [`Graph`]: Node and edge storage plus the sort entry points
//! - [`TopSortOptions`]: Per-call traversal configuration
//! - [`OrderedSet`]: Insertion-ordered set with O(1) membership and position lookup
//! - [`Error`] / [`Cycle`]: The cycle report returned when no ordering exists
//!
//! # Example
//!
//! ```
//! use topsort::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("app", "lib")?;
//! graph.add_edge("lib", "core")?;
//!
//! assert_eq!(graph.top_sort(&"app")?, vec!["core", "lib", "app"]);
//!
//! graph.add_edge("core", "app")?;
//! let err = graph.top_sort(&"app").unwrap_err();
//! assert_eq!(err.to_string(), "cycle error: app -> lib -> core -> app");
//! # Ok::<(), topsort::Error<&str>>(())
//! ```

mod error;
mod graph;
mod ordered_set;
mod traversal;

pub use error::{Cycle, Error, Result};
pub use graph::Graph;
pub use ordered_set::OrderedSet;
pub use traversal::{EdgeOrder, TopSortOptions, TopologicalOrder};

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values that can identify a node in a [`Graph`].
///
/// The key is the node: no payload is stored alongside it. Keys need a total
/// order for [`EdgeOrder::Sorted`] traversal and `Hash` for constant-time
/// lookups. This trait is implemented automatically for every qualifying type,
/// such as `&str`, `String` and the integer types.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug {}

impl<K> NodeKey for K where K: Clone + Eq + Hash + Ord + Debug {}
