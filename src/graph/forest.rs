//! Parent-pointer spanning forests over word-graph nodes.
//!
//! Each strongly connected component gets one tree, rooted at the component
//! root. A [`Forest`] stores, per node, the parent node and the generator
//! label of the tree edge connecting them; roots have neither. Multiplier
//! reconstruction walks these parent chains and composes the labels.

use crate::graph::node::PointIndex;

/// A forest of rooted trees with generator-labeled edges.
///
/// The meaning of a tree edge depends on orientation:
/// - in a *spanning* forest, edges point away from the root, and `label(n)`
///   is the label of the word-graph edge `parent(n) --label--> n`;
/// - in a *reverse spanning* forest, each step toward the root follows a
///   word-graph edge `n --label(n)--> parent(n)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Forest {
    parent: Vec<Option<PointIndex>>,
    label: Vec<Option<usize>>,
}

impl Forest {
    /// A forest of `n` isolated nodes.
    pub fn with_nodes(n: usize) -> Self {
        Self {
            parent: vec![None; n],
            label: vec![None; n],
        }
    }

    /// Number of nodes, roots included.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True if the forest has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Parent of `node`, or `None` for roots and out-of-range nodes.
    #[inline]
    pub fn parent(&self, node: PointIndex) -> Option<PointIndex> {
        self.parent.get(node.index()).copied().flatten()
    }

    /// Label of the tree edge attached to `node`, or `None` for roots.
    #[inline]
    pub fn label(&self, node: PointIndex) -> Option<usize> {
        self.label.get(node.index()).copied().flatten()
    }

    /// True if `node` has no parent.
    #[inline]
    pub fn is_root(&self, node: PointIndex) -> bool {
        self.parent(node).is_none()
    }

    /// Attaches `node` below `parent` via a tree edge with `label`.
    ///
    /// # Panics
    /// If `node` is out of range; callers size the forest with
    /// [`Forest::with_nodes`] before attaching.
    pub fn set_parent(&mut self, node: PointIndex, parent: PointIndex, label: usize) {
        self.parent[node.index()] = Some(parent);
        self.label[node.index()] = Some(label);
    }

    /// Edge labels on the walk from `node` up to its root, in walk order.
    ///
    /// Empty for roots. The walk terminates because tree edges always point
    /// strictly toward the root.
    pub fn path_to_root(&self, node: PointIndex) -> Vec<usize> {
        let mut labels = Vec::new();
        let mut current = node;
        while let (Some(label), Some(parent)) = (self.label(current), self.parent(current)) {
            labels.push(label);
            current = parent;
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_nodes_are_roots() {
        let f = Forest::with_nodes(3);
        assert_eq!(f.len(), 3);
        for n in 0..3u32 {
            assert!(f.is_root(PointIndex::new(n)));
            assert!(f.path_to_root(PointIndex::new(n)).is_empty());
        }
    }

    #[test]
    fn path_to_root_walks_parent_chain_in_order() {
        // 0 <-a- 1 <-b- 2
        let mut f = Forest::with_nodes(3);
        f.set_parent(PointIndex::new(1), PointIndex::new(0), 0);
        f.set_parent(PointIndex::new(2), PointIndex::new(1), 1);
        assert_eq!(f.path_to_root(PointIndex::new(2)), vec![1, 0]);
        assert_eq!(f.path_to_root(PointIndex::new(1)), vec![0]);
        assert_eq!(f.parent(PointIndex::new(2)), Some(PointIndex::new(1)));
        assert_eq!(f.label(PointIndex::new(2)), Some(1));
    }
}
