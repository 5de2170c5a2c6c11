//! Error types for graph sorting.

use std::fmt;
use thiserror::Error;

/// Result type for graph operations, generic over the node key.
pub type Result<T, K> = std::result::Result<T, Error<K>>;

/// Errors that can occur while ordering a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<K> {
    /// A dependency cycle was reached from the start key.
    #[error("cycle error: {cycle}")]
    CycleDetected {
        /// The keys forming the cycle, in visit order.
        cycle: Cycle<K>,
    },
}

impl<K> Error<K> {
    /// The cycle carried by this error.
    #[must_use]
    pub fn cycle(&self) -> &Cycle<K> {
        match self {
            Self::CycleDetected { cycle } => cycle,
        }
    }
}

/// A closed path through the graph.
///
/// The first key is repeated as the last one, so `a -> b -> a` holds three
/// keys. A self edge yields `a -> a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle<K> {
    keys: Vec<K>,
}

impl<K> Cycle<K> {
    pub(crate) fn new(keys: Vec<K>) -> Self {
        debug_assert!(keys.len() >= 2, "a cycle closes on its first key");
        Self { keys }
    }

    /// The keys of the cycle in visit order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Consume the cycle, returning its keys.
    #[must_use]
    pub fn into_keys(self) -> Vec<K> {
        self.keys
    }

    /// The key the cycle starts and ends on.
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.keys.first()
    }

    /// Number of keys, counting the repeated first key twice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the cycle holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: fmt::Display> fmt::Display for Cycle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
