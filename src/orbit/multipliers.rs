//! Memoization of multipliers realizing point↔root paths.
//!
//! Derivation itself lives in the action facade (it needs the generator set
//! and the spanning forests); this module only owns the per-direction memo
//! maps. Entries are cleared whenever the action mutates its word graph, so
//! a stored multiplier is never stale.

use hashbrown::HashMap;

use crate::bounds::Element;
use crate::cache::InvalidateCache;
use crate::graph::node::PointIndex;

/// Which end of the path a multiplier realizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Composes labels along a path from the point to its component root.
    ToRoot,
    /// Composes labels along a path from the component root to the point.
    FromRoot,
}

/// Optional memo maps for multipliers, one per direction.
#[derive(Clone, Debug)]
pub struct MultiplierCache<E: Element> {
    enabled: bool,
    to_root: HashMap<PointIndex, E>,
    from_root: HashMap<PointIndex, E>,
}

impl<E: Element> Default for MultiplierCache<E> {
    fn default() -> Self {
        Self {
            enabled: false,
            to_root: HashMap::new(),
            from_root: HashMap::new(),
        }
    }
}

impl<E: Element> MultiplierCache<E> {
    /// A disabled cache; nothing is stored until enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if memoization is on.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Turns memoization on or off. Turning it off drops stored entries.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.invalidate_cache();
        }
    }

    /// Stored multiplier for `(index, direction)`, if any.
    pub fn get(&self, direction: Direction, index: PointIndex) -> Option<&E> {
        match direction {
            Direction::ToRoot => self.to_root.get(&index),
            Direction::FromRoot => self.from_root.get(&index),
        }
    }

    /// Memoizes `element` for `(index, direction)` when enabled.
    pub fn store(&mut self, direction: Direction, index: PointIndex, element: E) {
        if !self.enabled {
            return;
        }
        match direction {
            Direction::ToRoot => self.to_root.insert(index, element),
            Direction::FromRoot => self.from_root.insert(index, element),
        };
    }
}

impl<E: Element> InvalidateCache for MultiplierCache<E> {
    fn invalidate_cache(&mut self) {
        self.to_root.clear();
        self.from_root.clear();
    }
}
