//! Orbit enumeration facade.
//!
//! An [`Action`] closes a set of seed points under a generating set of
//! elements, incrementally and resumably: `run_for`, `run_until`, and
//! `enumerate` stop at checkpoints between node expansions and leave a valid
//! partial snapshot behind; calling any `run*` method again resumes.
//!
//! The facade owns the point registry, the generator set, the word graph,
//! the cooperative [`Runner`], the lazily recomputed SCC decomposition, and
//! the optional multiplier memo. Everything is single-threaded; `&mut self`
//! on mutating and triggering methods is the serialization contract.
//!
//! The `S` type parameter fixes the action side. [`RightAction`] satisfies
//! `p . (a b) = (p . a) . b`; [`LeftAction`] the mirror. The side only
//! affects the order in which multiplier reconstruction composes generator
//! labels.

use std::collections::VecDeque;
use std::marker::PhantomData;
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::bounds::{ActOn, Left, PointLike, Right, Side};
use crate::cache::InvalidateCache;
use crate::error::ActionError;
use crate::graph::gabow::Gabow;
use crate::graph::node::PointIndex;
use crate::graph::word_graph::WordGraph;
use crate::orbit::generators::GeneratorSet;
use crate::orbit::multipliers::{Direction, MultiplierCache};
use crate::orbit::runner::{Runner, RunnerState};
use crate::orbit::store::PointStore;

/// Closure of seed points under a generating set, with SCC queries and
/// multiplier reconstruction.
#[derive(Clone, Debug)]
pub struct Action<P, E, S = Right>
where
    P: PointLike,
    E: ActOn<P>,
    S: Side,
{
    store: PointStore<P>,
    generators: GeneratorSet<E>,
    graph: WordGraph,
    /// Per node: how many labels have been applied to it so far. Nodes with
    /// `filled < generators.len()` owe edge computations and sit in the
    /// frontier; late `add_generator` calls re-enqueue completed nodes
    /// instead of recomputing anything eagerly.
    filled: Vec<usize>,
    frontier: VecDeque<PointIndex>,
    runner: Runner,
    sccs: OnceCell<Gabow>,
    multipliers: MultiplierCache<E>,
    /// Shape recorded from the first generator (or shaped seed); all later
    /// additions must match.
    degree: Option<usize>,
    _side: PhantomData<S>,
}

/// An action where points are acted on from the right.
pub type RightAction<P, E> = Action<P, E, Right>;
/// An action where points are acted on from the left.
pub type LeftAction<P, E> = Action<P, E, Left>;

impl<P, E, S> Default for Action<P, E, S>
where
    P: PointLike,
    E: ActOn<P>,
    S: Side,
{
    fn default() -> Self {
        Self {
            store: PointStore::new(),
            generators: GeneratorSet::new(),
            graph: WordGraph::new(),
            filled: Vec::new(),
            frontier: VecDeque::new(),
            runner: Runner::new(),
            sccs: OnceCell::new(),
            multipliers: MultiplierCache::new(),
            degree: None,
            _side: PhantomData,
        }
    }
}

impl<P, E, S> Action<P, E, S>
where
    P: PointLike,
    E: ActOn<P>,
    S: Side,
{
    /// Creates an empty action: no seeds, no generators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets to the freshly constructed state, releasing all points, edges,
    /// and caches together.
    pub fn init(&mut self) {
        *self = Self::default();
    }

    // ---------------------------------------------------------------------
    // building the action
    // ---------------------------------------------------------------------

    /// Registers `point` as a seed, returning its index. Newly discovered
    /// seeds are enqueued for expansion; re-adding an existing point is a
    /// no-op and returns the original index.
    ///
    /// # Errors
    /// [`ActionError::DegreeMismatch`] if the point's shape disagrees with
    /// previously added data.
    pub fn add_seed(&mut self, point: P) -> Result<PointIndex, ActionError> {
        if let Some(found) = point.degree() {
            match self.degree {
                Some(expected) if expected != found => {
                    return Err(ActionError::DegreeMismatch { expected, found });
                }
                Some(_) => {}
                None => self.degree = Some(found),
            }
        }
        let (index, is_new) = self.store.insert(point);
        if is_new {
            let node = self.graph.add_node();
            debug_assert_eq!(node, index);
            self.filled.push(0);
            self.frontier.push_back(index);
            self.invalidate_cache();
            self.reopen();
        }
        Ok(index)
    }

    /// Appends `element` to the generator set in O(1), returning its label.
    ///
    /// Already-expanded nodes now owe one edge computation for the new
    /// label; they are re-enqueued and caught up lazily on the next run.
    ///
    /// # Errors
    /// [`ActionError::DegreeMismatch`] if the element's shape disagrees with
    /// previously added data.
    pub fn add_generator(&mut self, element: E) -> Result<usize, ActionError> {
        let found = element.degree();
        match self.degree {
            Some(expected) if expected != found => {
                return Err(ActionError::DegreeMismatch { expected, found });
            }
            Some(_) => {}
            None => self.degree = Some(found),
        }
        let label = self.generators.push(element);
        let graph_label = self.graph.add_label();
        debug_assert_eq!(label, graph_label);
        // Nodes that had completed all previous labels owe exactly this one;
        // incomplete nodes are already queued.
        for node in 0..self.filled.len() {
            if self.filled[node] == label {
                self.frontier.push_back(PointIndex::new(node as u32));
            }
        }
        self.invalidate_cache();
        self.reopen();
        Ok(label)
    }

    /// Pre-sizes internal storage for `capacity` points.
    pub fn reserve(&mut self, capacity: usize) {
        self.store.reserve(capacity);
        self.graph.reserve(capacity);
        self.filled.reserve(capacity.saturating_sub(self.filled.len()));
    }

    // ---------------------------------------------------------------------
    // enumeration
    // ---------------------------------------------------------------------

    /// Runs enumeration until the orbit closes (or the action is killed).
    pub fn run(&mut self) -> Result<(), ActionError> {
        self.run_impl(None, |_| false)
    }

    /// Runs for at most `budget`, stopping at the first checkpoint past the
    /// deadline. Resumable.
    pub fn run_for(&mut self, budget: Duration) -> Result<(), ActionError> {
        self.run_impl(Some(budget), |_| false)
    }

    /// Runs until `predicate` returns true at a checkpoint (or the orbit
    /// closes). Resumable.
    pub fn run_until<F>(&mut self, predicate: F) -> Result<(), ActionError>
    where
        F: FnMut(&Self) -> bool,
    {
        self.run_impl(None, predicate)
    }

    /// Runs until at least `limit` points have been discovered (or the
    /// orbit closes).
    pub fn enumerate(&mut self, limit: usize) -> Result<(), ActionError> {
        self.run_until(|action| action.current_size() >= limit)
    }

    /// Requests cooperative cancellation; observed at the next checkpoint.
    /// State stays a valid partial snapshot.
    pub fn kill(&mut self) {
        self.runner.kill();
    }

    fn run_impl<F>(&mut self, budget: Option<Duration>, mut stop: F) -> Result<(), ActionError>
    where
        F: FnMut(&Self) -> bool,
    {
        if self.runner.dead() || self.runner.finished() {
            return Ok(());
        }
        if self.generators.is_empty() {
            return Err(ActionError::InvalidState("cannot run without generators"));
        }
        if self.store.is_empty() {
            return Err(ActionError::InvalidState("cannot run without seeds"));
        }
        self.runner.start(budget);
        loop {
            if self.runner.checkpoint() {
                return Ok(());
            }
            if stop(self) {
                self.runner.stop_by_predicate();
                return Ok(());
            }
            self.runner.maybe_report(self.store.len(), self.frontier.len());
            let Some(node) = self.frontier.pop_front() else {
                self.runner.finish();
                return Ok(());
            };
            self.expand(node)?;
        }
    }

    /// Applies every outstanding generator to `node`, recording edges and
    /// enqueueing newly discovered targets. The store is the single
    /// deduplication point.
    fn expand(&mut self, node: PointIndex) -> Result<(), ActionError> {
        let total = self.generators.len();
        let start = self.filled[node.index()];
        for label in start..total {
            let image = self.generators.get(label)?.act(self.store.at(node)?);
            let (target, is_new) = self.store.insert(image);
            if is_new {
                let added = self.graph.add_node();
                debug_assert_eq!(added, target);
                self.filled.push(0);
                self.frontier.push_back(target);
            }
            self.graph.set_target(node, label, target)?;
        }
        self.filled[node.index()] = total;
        self.invalidate_cache();
        Ok(())
    }

    /// Moves a finished runner back to not-started when new work appears.
    fn reopen(&mut self) {
        self.runner.reopen();
    }

    // ---------------------------------------------------------------------
    // queries
    // ---------------------------------------------------------------------

    /// Total orbit size. Triggering: drives enumeration to completion first.
    pub fn size(&mut self) -> Result<usize, ActionError> {
        self.run()?;
        Ok(self.store.len())
    }

    /// Number of points discovered so far. Never enumerates.
    #[inline]
    pub fn current_size(&self) -> usize {
        self.store.len()
    }

    /// True if no point has been discovered yet.
    #[inline]
    pub fn empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Index of `point` if discovered, `None` otherwise. Never enumerates.
    #[inline]
    pub fn position(&self, point: &P) -> Option<PointIndex> {
        self.store.position(point)
    }

    /// The point at `index`.
    ///
    /// # Errors
    /// [`ActionError::IndexOutOfRange`] past `current_size()`.
    #[inline]
    pub fn at(&self, index: PointIndex) -> Result<&P, ActionError> {
        self.store.at(index)
    }

    /// Discovered points in discovery order; restartable, never enumerates.
    #[inline]
    pub fn iter_points(&self) -> std::slice::Iter<'_, P> {
        self.store.iter()
    }

    /// Number of generators added so far.
    #[inline]
    pub fn number_of_generators(&self) -> usize {
        self.generators.len()
    }

    /// Generators in insertion order.
    #[inline]
    pub fn generators(&self) -> std::slice::Iter<'_, E> {
        self.generators.iter()
    }

    /// The word graph recorded so far. Never enumerates; while enumeration
    /// is in flight some targets are still undefined.
    #[inline]
    pub fn word_graph(&self) -> &WordGraph {
        &self.graph
    }

    // ---------------------------------------------------------------------
    // run control observers
    // ---------------------------------------------------------------------

    /// Current cooperative state.
    #[inline]
    pub fn state(&self) -> RunnerState {
        self.runner.state()
    }

    /// True once the frontier emptied: the orbit is closed.
    #[inline]
    pub fn finished(&self) -> bool {
        self.runner.finished()
    }

    /// True if the last run ended early (timeout, predicate, or kill).
    #[inline]
    pub fn stopped(&self) -> bool {
        self.runner.stopped()
    }

    /// True once killed.
    #[inline]
    pub fn dead(&self) -> bool {
        self.runner.dead()
    }

    /// True if the last run hit its duration budget.
    #[inline]
    pub fn timed_out(&self) -> bool {
        self.runner.timed_out()
    }

    /// Enables (`Some`) or disables (`None`) periodic progress reports.
    pub fn report_every(&mut self, interval: Option<Duration>) {
        self.runner.report_every(interval);
    }

    // ---------------------------------------------------------------------
    // SCC queries
    // ---------------------------------------------------------------------

    /// The SCC decomposition of the current word-graph snapshot, recomputed
    /// lazily after any mutation. Never enumerates; before `finished()` it
    /// describes only the induced sub-graph on discovered nodes.
    pub fn scc(&mut self) -> Result<&Gabow, ActionError> {
        self.ensure_scc()?;
        self.sccs
            .get()
            .ok_or(ActionError::InvalidState("scc cache empty after compute"))
    }

    /// Root of the component containing the point at `index`.
    pub fn root_of_scc_at(&mut self, index: PointIndex) -> Result<PointIndex, ActionError> {
        self.check_index(index)?;
        self.scc()?.root_of(index)
    }

    /// Root of the component containing `point`.
    ///
    /// # Errors
    /// [`ActionError::InvalidState`] if `point` has not been discovered.
    pub fn root_of_scc(&mut self, point: &P) -> Result<PointIndex, ActionError> {
        let index = self
            .store
            .position(point)
            .ok_or(ActionError::InvalidState("point not yet discovered"))?;
        self.root_of_scc_at(index)
    }

    // ---------------------------------------------------------------------
    // multipliers
    // ---------------------------------------------------------------------

    /// Enables or disables memoization of multipliers per
    /// `(index, direction)`. Disabling drops stored entries.
    pub fn cache_scc_multipliers(&mut self, enabled: bool) {
        self.multipliers.set_enabled(enabled);
    }

    /// True if multiplier memoization is on.
    #[inline]
    pub fn scc_multipliers_cached(&self) -> bool {
        self.multipliers.enabled()
    }

    /// An element mapping the point at `index` onto its component root:
    /// `apply(m, at(index)) == at(root_of_scc_at(index))`. Identity when
    /// `index` is the root itself.
    ///
    /// Triggers lazy SCC computation if needed; never enumerates.
    ///
    /// # Errors
    /// [`ActionError::IndexOutOfRange`] for unknown indices,
    /// [`ActionError::InvalidState`] when no generator exists yet.
    pub fn multiplier_to_scc_root(&mut self, index: PointIndex) -> Result<E, ActionError> {
        self.multiplier(Direction::ToRoot, index)
    }

    /// An element mapping the component root onto the point at `index`:
    /// `apply(m, at(root_of_scc_at(index))) == at(index)`.
    pub fn multiplier_from_scc_root(&mut self, index: PointIndex) -> Result<E, ActionError> {
        self.multiplier(Direction::FromRoot, index)
    }

    fn multiplier(&mut self, direction: Direction, index: PointIndex) -> Result<E, ActionError> {
        self.check_index(index)?;
        if self.generators.is_empty() {
            return Err(ActionError::InvalidState(
                "multipliers need at least one generator",
            ));
        }
        self.ensure_scc()?;
        if let Some(found) = self.multipliers.get(direction, index) {
            return Ok(found.clone());
        }
        let labels = {
            let scc = self
                .sccs
                .get()
                .ok_or(ActionError::InvalidState("scc cache empty after compute"))?;
            match direction {
                // Reverse-forest parent chains follow word-graph edges, so
                // the walk order is already the application order.
                Direction::ToRoot => scc.reverse_spanning_forest().path_to_root(index),
                // Forward-forest chains walk child-to-root; application
                // order is root-to-child.
                Direction::FromRoot => {
                    let mut labels = scc.spanning_forest().path_to_root(index);
                    labels.reverse();
                    labels
                }
            }
        };
        let mut result = self.generators.get(0)?.identity();
        for label in labels {
            result = S::compose(&result, self.generators.get(label)?);
        }
        self.multipliers.store(direction, index, result.clone());
        Ok(result)
    }

    // ---------------------------------------------------------------------
    // internals
    // ---------------------------------------------------------------------

    fn check_index(&self, index: PointIndex) -> Result<(), ActionError> {
        if index.index() >= self.store.len() {
            return Err(ActionError::IndexOutOfRange {
                index: index.index(),
                size: self.store.len(),
            });
        }
        Ok(())
    }

    /// Recomputes the SCC cache if it is missing or describes an older
    /// word-graph generation.
    fn ensure_scc(&mut self) -> Result<(), ActionError> {
        let stale = self
            .sccs
            .get()
            .is_some_and(|scc| scc.generation() != self.graph.generation());
        if stale {
            self.sccs.take();
        }
        self.sccs.get_or_try_init(|| Gabow::compute(&self.graph))?;
        Ok(())
    }
}

impl<P, E, S> InvalidateCache for Action<P, E, S>
where
    P: PointLike,
    E: ActOn<P>,
    S: Side,
{
    fn invalidate_cache(&mut self) {
        self.sccs.take();
        self.multipliers.invalidate_cache();
    }
}
