//! Deduplicated, append-only registry of discovered points.
//!
//! The store is the single deduplication point of the engine: every image
//! computed during enumeration goes through [`PointStore::insert`], which
//! either returns the existing index or appends. Indices are dense, assigned
//! in discovery order, and never reused or reordered, so index assignment is
//! deterministic given insertion order.

use hashbrown::HashMap;

use crate::bounds::PointLike;
use crate::error::ActionError;
use crate::graph::node::PointIndex;

/// Forward (`index -> point`) and reverse (`point -> index`) registry.
#[derive(Clone, Debug)]
pub struct PointStore<P: PointLike> {
    points: Vec<P>,
    index: HashMap<P, PointIndex>,
}

impl<P: PointLike> Default for PointStore<P> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<P: PointLike> PointStore<P> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing has been stored yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inserts `point`, returning its index and whether it was newly added.
    ///
    /// Idempotent: re-inserting an existing point returns the original index
    /// and changes nothing.
    pub fn insert(&mut self, point: P) -> (PointIndex, bool) {
        if let Some(&existing) = self.index.get(&point) {
            return (existing, false);
        }
        let idx = PointIndex::new(self.points.len() as u32);
        self.index.insert(point.clone(), idx);
        self.points.push(point);
        (idx, true)
    }

    /// Index of `point` if it has been discovered; `None` otherwise.
    /// Never mutates.
    #[inline]
    pub fn position(&self, point: &P) -> Option<PointIndex> {
        self.index.get(point).copied()
    }

    /// The point at `index`.
    ///
    /// # Errors
    /// [`ActionError::IndexOutOfRange`] past the current size.
    pub fn at(&self, index: PointIndex) -> Result<&P, ActionError> {
        self.points
            .get(index.index())
            .ok_or(ActionError::IndexOutOfRange {
                index: index.index(),
                size: self.points.len(),
            })
    }

    /// Stored points in discovery order. Restartable: each call yields a
    /// fresh iterator over the points discovered so far.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    /// Pre-sizes both directions for `capacity` points.
    pub fn reserve(&mut self, capacity: usize) {
        let extra = capacity.saturating_sub(self.points.len());
        self.points.reserve(extra);
        self.index.reserve(extra);
    }
}
