//! # orbit-action
//!
//! orbit-action computes orbits of semigroup and group actions: the closure
//! of a set of seed points under repeated application of a generating set of
//! opaque elements. Enumeration is incremental and resumable, records the
//! induced generator-labeled word graph, decomposes it into strongly
//! connected components on demand, and reconstructs "multiplier" elements
//! realizing paths between any discovered point and its component root.
//!
//! ## Features
//! - Deduplicated, append-only point registry with dense, discovery-order
//!   indices that never move
//! - Cooperative run control: duration budgets, point-count limits,
//!   caller-supplied stop predicates, and kill flags, all observed at
//!   checkpoints between node expansions
//! - Lazy, generation-checked SCC decomposition (non-recursive path-based
//!   algorithm, safe for very large orbits)
//! - Multiplier reconstruction for both left and right actions, with
//!   optional memoization
//!
//! ## Determinism
//!
//! Given a fixed seed and generator insertion order and a deterministic
//! `act`, point index assignment, the word-graph edge set, and SCC roots are
//! bit-for-bit reproducible across runs.
//!
//! ## Example
//!
//! ```rust
//! use orbit_action::prelude::*;
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! struct Transf(Vec<u32>);
//!
//! impl Element for Transf {
//!     fn degree(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn identity(&self) -> Self {
//!         Transf((0..self.0.len() as u32).collect())
//!     }
//!     fn product(&self, other: &Self) -> Self {
//!         Transf(self.0.iter().map(|&i| other.0[i as usize]).collect())
//!     }
//! }
//!
//! impl ActOn<u32> for Transf {
//!     fn act(&self, point: &u32) -> u32 {
//!         self.0[*point as usize]
//!     }
//! }
//!
//! let mut orbit = RightAction::<u32, Transf>::new();
//! orbit.add_seed(0)?;
//! orbit.add_generator(Transf(vec![1, 0]))?;
//! assert_eq!(orbit.size()?, 2);
//!
//! let root = orbit.root_of_scc(&1)?;
//! assert_eq!(*orbit.at(root)?, 0);
//!
//! let m = orbit.multiplier_to_scc_root(PointIndex::new(1))?;
//! assert_eq!(m.act(&1), 0);
//! # Ok::<(), orbit_action::ActionError>(())
//! ```
//!
//! Concrete algebraic element types live outside this crate: anything
//! implementing [`bounds::Element`] and [`bounds::ActOn`] plugs in. Whole
//! semigroup enumeration, stabilizer chains, and rewriting systems are out
//! of scope.

pub mod bounds;
pub mod cache;
pub mod error;
pub mod graph;
pub mod orbit;

pub use cache::InvalidateCache;
pub use error::ActionError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::bounds::{ActOn, Element, Left, PointLike, Right, Side};
    pub use crate::cache::InvalidateCache;
    pub use crate::error::ActionError;
    pub use crate::graph::forest::Forest;
    pub use crate::graph::gabow::Gabow;
    pub use crate::graph::node::PointIndex;
    pub use crate::graph::word_graph::WordGraph;
    pub use crate::orbit::action::{Action, LeftAction, RightAction};
    pub use crate::orbit::generators::GeneratorSet;
    pub use crate::orbit::multipliers::{Direction, MultiplierCache};
    pub use crate::orbit::runner::{Runner, RunnerState};
    pub use crate::orbit::store::PointStore;
}
