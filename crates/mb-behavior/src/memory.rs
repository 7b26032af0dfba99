//! Residual plan carried from one turn to the next.

use std::collections::VecDeque;

use mb_core::NodeId;

/// The places a strategy still intends to visit, next stop first.
///
/// Owned by the driver and handed to the strategy by value each turn; the
/// strategy returns the memory to keep.  Stateless strategies return it
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMemory(VecDeque<NodeId>);

impl RouteMemory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Split into the next stop and the remaining plan.
    pub fn split_first(mut self) -> Option<(NodeId, RouteMemory)> {
        let head = self.0.pop_front()?;
        Some((head, self))
    }

    /// Remaining stops, next first.
    pub fn stops(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<NodeId>> for RouteMemory {
    fn from(stops: Vec<NodeId>) -> Self {
        Self(stops.into())
    }
}

impl FromIterator<NodeId> for RouteMemory {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
