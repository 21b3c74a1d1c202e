//! Path-based strongly-connected-component decomposition of a word graph.
//!
//! This module provides [`Gabow`], the computed SCC data for one word-graph
//! snapshot, and [`Gabow::compute`], the decomposition itself. The traversal
//! is non-recursive (explicit stack of DFS frames) so very large orbits do
//! not overflow the call stack.
//!
//! The algorithm maintains two auxiliary stacks alongside the DFS:
//! - a *path* stack of currently-open nodes, and
//! - a *boundary* stack of nodes marking where one candidate component ends
//!   and the next begins.
//! When a node finishes and is its own boundary marker, the path stack is
//! popped down to it and one component is emitted. The component *root* is
//! the minimum member of the component, so it does not depend on which node
//! the DFS happened to enter the component through.
//!
//! Results describe exactly the snapshot that was passed in: the word-graph
//! generation is recorded, and callers treat differing generations as stale.
//! Undefined targets are skipped, so a partially enumerated graph yields the
//! decomposition of the induced sub-graph on discovered edges.

use itertools::Itertools;

use crate::error::ActionError;
use crate::graph::forest::Forest;
use crate::graph::node::PointIndex;
use crate::graph::word_graph::WordGraph;

/// Traversal state of a node during the decomposition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NodeState {
    Unvisited,
    OnStack { preorder: u32 },
    Finished { component: u32 },
}

/// Strongly connected components of one word-graph snapshot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gabow {
    /// Component id per node.
    id: Vec<u32>,
    /// Nodes of each component, ascending by index.
    components: Vec<Vec<PointIndex>>,
    /// Root (minimum member) of each component.
    roots: Vec<PointIndex>,
    /// Per-component spanning trees rooted at the component root, edges
    /// oriented away from the root.
    forward: Forest,
    /// Per-component spanning trees with edges oriented toward the root.
    reverse: Forest,
    /// Word-graph generation this decomposition was computed at.
    generation: u64,
}

impl Gabow {
    /// Decomposes the current snapshot of `graph` into SCCs.
    ///
    /// # Errors
    /// Propagates word-graph access errors; these cannot occur for a
    /// well-formed graph.
    pub fn compute(graph: &WordGraph) -> Result<Self, ActionError> {
        let n = graph.number_of_nodes();
        let degree = graph.out_degree();

        let mut state = vec![NodeState::Unvisited; n];
        let mut id = vec![0u32; n];
        let mut next_preorder: u32 = 0;
        let mut component_count: u32 = 0;

        // DFS frames are (node, next label to examine).
        let mut frames: Vec<(PointIndex, usize)> = Vec::new();
        let mut path: Vec<PointIndex> = Vec::new();
        let mut boundary: Vec<PointIndex> = Vec::new();

        for start in 0..n {
            let start = PointIndex::new(start as u32);
            if state[start.index()] != NodeState::Unvisited {
                continue;
            }
            state[start.index()] = NodeState::OnStack {
                preorder: next_preorder,
            };
            next_preorder += 1;
            path.push(start);
            boundary.push(start);
            frames.push((start, 0));

            while let Some(frame) = frames.last_mut() {
                let node = frame.0;
                if frame.1 < degree {
                    let label = frame.1;
                    frame.1 += 1;
                    let Some(target) = graph.target(node, label)? else {
                        continue;
                    };
                    match state[target.index()] {
                        NodeState::Unvisited => {
                            state[target.index()] = NodeState::OnStack {
                                preorder: next_preorder,
                            };
                            next_preorder += 1;
                            path.push(target);
                            boundary.push(target);
                            frames.push((target, 0));
                        }
                        NodeState::OnStack { preorder } => {
                            // Contract: everything on the boundary stack above
                            // the target belongs to the same component.
                            while let Some(&top) = boundary.last() {
                                match state[top.index()] {
                                    NodeState::OnStack { preorder: top_pre }
                                        if top_pre > preorder =>
                                    {
                                        boundary.pop();
                                    }
                                    _ => break,
                                }
                            }
                        }
                        NodeState::Finished { .. } => {}
                    }
                } else {
                    frames.pop();
                    if boundary.last() == Some(&node) {
                        boundary.pop();
                        let component = component_count;
                        component_count += 1;
                        loop {
                            let member = path.pop().ok_or(ActionError::InvalidState(
                                "scc path stack underflow",
                            ))?;
                            state[member.index()] = NodeState::Finished { component };
                            id[member.index()] = component;
                            if member == node {
                                break;
                            }
                        }
                    }
                }
            }
        }

        let components = group_by_component(&id, component_count);
        // Components list members ascending, so the minimum member is first.
        let roots: Vec<PointIndex> = components.iter().map(|c| c[0]).collect();
        let forward = spanning_forest(graph, &id, &roots)?;
        let reverse = reverse_spanning_forest(graph, &id, &roots)?;

        Ok(Self {
            id,
            components,
            roots,
            forward,
            reverse,
            generation: graph.generation(),
        })
    }

    /// Number of strongly connected components.
    #[inline]
    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }

    /// Component id of `node`.
    ///
    /// # Errors
    /// [`ActionError::IndexOutOfRange`] if `node` was not part of the
    /// decomposed snapshot.
    pub fn id_of(&self, node: PointIndex) -> Result<u32, ActionError> {
        self.id
            .get(node.index())
            .copied()
            .ok_or(ActionError::IndexOutOfRange {
                index: node.index(),
                size: self.id.len(),
            })
    }

    /// Root of the component containing `node`.
    pub fn root_of(&self, node: PointIndex) -> Result<PointIndex, ActionError> {
        Ok(self.roots[self.id_of(node)? as usize])
    }

    /// Roots of all components, indexed by component id.
    #[inline]
    pub fn roots(&self) -> &[PointIndex] {
        &self.roots
    }

    /// All components; each component lists its nodes in ascending order.
    #[inline]
    pub fn components(&self) -> &[Vec<PointIndex>] {
        &self.components
    }

    /// Nodes in the component containing `node`, ascending.
    pub fn component_of(&self, node: PointIndex) -> Result<&[PointIndex], ActionError> {
        Ok(&self.components[self.id_of(node)? as usize])
    }

    /// Spanning trees per component, rooted at the component root, edges
    /// oriented away from the root.
    #[inline]
    pub fn spanning_forest(&self) -> &Forest {
        &self.forward
    }

    /// Spanning trees per component with edges oriented toward the root:
    /// each tree step `n -> parent(n)` follows a word-graph edge labeled
    /// `label(n)`.
    #[inline]
    pub fn reverse_spanning_forest(&self) -> &Forest {
        &self.reverse
    }

    /// Word-graph generation this decomposition describes.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn group_by_component(id: &[u32], count: u32) -> Vec<Vec<PointIndex>> {
    let mut grouped = id
        .iter()
        .enumerate()
        .map(|(node, &component)| (component, PointIndex::new(node as u32)))
        .into_group_map();
    (0..count)
        .map(|component| grouped.remove(&component).unwrap_or_default())
        .collect()
}

/// BFS from each root over in-component edges, label order, recording the
/// first tree edge reaching each node.
fn spanning_forest(
    graph: &WordGraph,
    id: &[u32],
    roots: &[PointIndex],
) -> Result<Forest, ActionError> {
    let mut forest = Forest::with_nodes(id.len());
    let mut seen = vec![false; id.len()];
    let mut queue = std::collections::VecDeque::new();

    for &root in roots {
        seen[root.index()] = true;
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            for (label, target) in graph.targets(node)?.enumerate() {
                let Some(target) = target else { continue };
                if id[target.index()] == id[node.index()] && !seen[target.index()] {
                    seen[target.index()] = true;
                    forest.set_parent(target, node, label);
                    queue.push_back(target);
                }
            }
        }
    }
    Ok(forest)
}

/// BFS from each root over the transposed in-component edges. A tree edge
/// attaching `source` below `node` corresponds to the word-graph edge
/// `source --label--> node`, so parent chains spell original-direction paths
/// to the root.
fn reverse_spanning_forest(
    graph: &WordGraph,
    id: &[u32],
    roots: &[PointIndex],
) -> Result<Forest, ActionError> {
    // Transposed in-component adjacency, built in (node, label) order so the
    // BFS below is deterministic.
    let mut incoming: Vec<Vec<(PointIndex, usize)>> = vec![Vec::new(); id.len()];
    for node in 0..id.len() {
        let node = PointIndex::new(node as u32);
        for (label, target) in graph.targets(node)?.enumerate() {
            let Some(target) = target else { continue };
            if id[target.index()] == id[node.index()] {
                incoming[target.index()].push((node, label));
            }
        }
    }

    let mut forest = Forest::with_nodes(id.len());
    let mut seen = vec![false; id.len()];
    let mut queue = std::collections::VecDeque::new();

    for &root in roots {
        seen[root.index()] = true;
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            for &(source, label) in &incoming[node.index()] {
                if !seen[source.index()] {
                    seen[source.index()] = true;
                    forest.set_parent(source, node, label);
                    queue.push_back(source);
                }
            }
        }
    }
    Ok(forest)
}
