//! Generator-labeled word graph over discovered points.
//!
//! A [`WordGraph`] records, for every discovered point and every generator
//! label, the image point (if it has been computed yet). Nodes are
//! [`PointIndex`] values; labels are generator positions. Undefined targets
//! are represented as `None` rather than a magic number, so a partially
//! enumerated graph is always safely queryable.
//!
//! Every structural mutation bumps a generation counter. Derived data (SCC
//! partitions, spanning forests) records the generation it was computed at
//! and is stale once the counters differ.

use crate::error::ActionError;
use crate::graph::node::PointIndex;

/// Directed, generator-labeled graph on dense point indices.
///
/// Out-degree is uniform: once enumeration finishes, every node has exactly
/// one target per label (the graph is functional and total). While
/// enumeration is in flight some slots are still `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordGraph {
    /// `targets[node][label]` is the image of `node` under generator `label`.
    targets: Vec<Vec<Option<PointIndex>>>,
    /// Number of labels (generators); every row has this many slots.
    out_degree: usize,
    /// Bumped by every structural mutation.
    generation: u64,
}

impl WordGraph {
    /// Creates an empty word graph with no nodes and no labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes (discovered points).
    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.targets.len()
    }

    /// Number of labels (generators).
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Number of defined edges across all nodes.
    pub fn number_of_edges(&self) -> usize {
        self.targets
            .iter()
            .map(|row| row.iter().filter(|t| t.is_some()).count())
            .sum()
    }

    /// Mutation counter; derived data is valid only while this is unchanged.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The image of `node` under generator `label`, or `None` if the edge has
    /// not been computed yet.
    ///
    /// # Errors
    /// [`ActionError::IndexOutOfRange`] / [`ActionError::LabelOutOfRange`] if
    /// `node` or `label` is out of bounds.
    pub fn target(&self, node: PointIndex, label: usize) -> Result<Option<PointIndex>, ActionError> {
        let row = self
            .targets
            .get(node.index())
            .ok_or(ActionError::IndexOutOfRange {
                index: node.index(),
                size: self.targets.len(),
            })?;
        row.get(label)
            .copied()
            .ok_or(ActionError::LabelOutOfRange {
                label,
                out_degree: self.out_degree,
            })
    }

    /// Iterator over the target row of `node` in label order.
    ///
    /// # Errors
    /// [`ActionError::IndexOutOfRange`] if `node` is out of bounds.
    pub fn targets(
        &self,
        node: PointIndex,
    ) -> Result<impl Iterator<Item = Option<PointIndex>> + '_, ActionError> {
        let row = self
            .targets
            .get(node.index())
            .ok_or(ActionError::IndexOutOfRange {
                index: node.index(),
                size: self.targets.len(),
            })?;
        Ok(row.iter().copied())
    }

    /// Appends a node with all targets undefined, returning its index.
    pub fn add_node(&mut self) -> PointIndex {
        let idx = PointIndex::new(self.targets.len() as u32);
        self.targets.push(vec![None; self.out_degree]);
        self.generation += 1;
        idx
    }

    /// Appends a label, extending every existing row with an undefined slot,
    /// and returns the new label.
    pub fn add_label(&mut self) -> usize {
        let label = self.out_degree;
        self.out_degree += 1;
        for row in &mut self.targets {
            row.push(None);
        }
        self.generation += 1;
        label
    }

    /// Records the edge `(node, label) -> target`.
    ///
    /// # Errors
    /// Out-of-range `node`, `label`, or `target`.
    pub fn set_target(
        &mut self,
        node: PointIndex,
        label: usize,
        target: PointIndex,
    ) -> Result<(), ActionError> {
        let n = self.targets.len();
        if target.index() >= n {
            return Err(ActionError::IndexOutOfRange {
                index: target.index(),
                size: n,
            });
        }
        let row = self
            .targets
            .get_mut(node.index())
            .ok_or(ActionError::IndexOutOfRange {
                index: node.index(),
                size: n,
            })?;
        let slot = row.get_mut(label).ok_or(ActionError::LabelOutOfRange {
            label,
            out_degree: self.out_degree,
        })?;
        *slot = Some(target);
        self.generation += 1;
        Ok(())
    }

    /// Pre-sizes node storage for `nodes` nodes.
    pub fn reserve(&mut self, nodes: usize) {
        self.targets
            .reserve(nodes.saturating_sub(self.targets.len()));
    }
}
