//! Structural properties of the SCC decomposition over enumerated orbits:
//! partition/cover, root well-definedness, closure, and mutual reachability.

mod common;

use common::Transf;
use orbit_action::prelude::*;

fn enumerated(gens: &[Vec<u32>], seed: u32) -> RightAction<u32, Transf> {
    let mut action = RightAction::new();
    action.add_seed(seed).unwrap();
    for g in gens {
        action.add_generator(Transf(g.clone())).unwrap();
    }
    action.run().unwrap();
    action
}

/// Nodes reachable from `start` in the word graph, by BFS.
fn reachable(g: &WordGraph, start: PointIndex) -> Vec<bool> {
    let mut seen = vec![false; g.number_of_nodes()];
    let mut queue = std::collections::VecDeque::from([start]);
    seen[start.index()] = true;
    while let Some(node) = queue.pop_front() {
        for label in 0..g.out_degree() {
            if let Some(target) = g.target(node, label).unwrap() {
                if !seen[target.index()] {
                    seen[target.index()] = true;
                    queue.push_back(target);
                }
            }
        }
    }
    seen
}

#[test]
fn components_partition_and_cover_all_nodes() {
    let mut action = enumerated(&[vec![1, 2, 0, 4, 3], vec![0, 0, 2, 3, 4]], 0);
    let n = action.current_size();
    let scc = action.scc().unwrap();

    let mut seen = vec![0u32; n];
    for component in scc.components() {
        assert!(!component.is_empty());
        for &node in component {
            seen[node.index()] += 1;
        }
    }
    assert!(seen.iter().all(|&count| count == 1));
}

#[test]
fn same_component_means_mutually_reachable() {
    let mut action = enumerated(&[vec![1, 2, 0, 4, 3], vec![3, 3, 3, 3, 4]], 0);
    let n = action.current_size();
    let graph = action.word_graph().clone();
    let scc = action.scc().unwrap();

    let reach: Vec<Vec<bool>> = (0..n)
        .map(|i| reachable(&graph, PointIndex::new(i as u32)))
        .collect();

    for u in 0..n {
        for v in 0..n {
            let same = scc.id_of(PointIndex::new(u as u32)).unwrap()
                == scc.id_of(PointIndex::new(v as u32)).unwrap();
            let mutual = reach[u][v] && reach[v][u];
            assert_eq!(same, mutual, "nodes {u} and {v}");
        }
    }
}

#[test]
fn roots_agree_exactly_within_components() {
    let mut action = enumerated(&[vec![1, 0, 3, 4, 2], vec![2, 2, 2, 2, 2]], 0);
    let n = action.current_size() as u32;
    for u in 0..n {
        for v in 0..n {
            let ru = action.root_of_scc_at(PointIndex::new(u)).unwrap();
            let rv = action.root_of_scc_at(PointIndex::new(v)).unwrap();
            let scc = action.scc().unwrap();
            let same = scc.id_of(PointIndex::new(u)).unwrap()
                == scc.id_of(PointIndex::new(v)).unwrap();
            assert_eq!(ru == rv, same);
        }
    }
}

#[test]
fn closure_once_finished() {
    let action = enumerated(&[vec![1, 2, 3, 0], vec![1, 1, 3, 3]], 0);
    assert!(action.finished());
    let g = action.word_graph();
    for node in 0..g.number_of_nodes() {
        for label in 0..g.out_degree() {
            let target = g.target(PointIndex::new(node as u32), label).unwrap();
            let target = target.expect("finished orbit must be total");
            assert!(target.index() < g.number_of_nodes());
        }
    }
    assert_eq!(g.number_of_edges(), g.number_of_nodes() * g.out_degree());
}

#[test]
fn roots_are_minimum_component_members() {
    let mut action = enumerated(&[vec![1, 2, 0, 3], vec![3, 3, 3, 3]], 0);
    let scc = action.scc().unwrap();
    for (id, component) in scc.components().iter().enumerate() {
        let root = scc.roots()[id];
        assert!(component.contains(&root));
        // Components list members ascending.
        assert_eq!(root, component[0]);
    }
}

#[test]
fn root_is_minimum_member_when_search_enters_elsewhere() {
    // The {p2, p3} cycle is first reached through p3 (0 -g0-> 1 -g0-> 3);
    // the canonical root is still the minimum member p2.
    let mut action = enumerated(&[vec![1, 3, 3, 2], vec![2, 1, 2, 3]], 0);
    assert_eq!(action.current_size(), 4);
    assert_eq!(
        action.root_of_scc_at(PointIndex::new(2)).unwrap(),
        PointIndex::new(2)
    );
    assert_eq!(
        action.root_of_scc_at(PointIndex::new(3)).unwrap(),
        PointIndex::new(2)
    );
    assert_eq!(action.root_of_scc(&3).unwrap(), PointIndex::new(2));

    // The to-root multiplier realizes an actual path.
    let m = action.multiplier_to_scc_root(PointIndex::new(3)).unwrap();
    assert_eq!(m.act(&3), 2);
}

#[test]
fn large_seeded_random_orbit_satisfies_all_invariants() {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    // Fixed seed so the run is reproducible.
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let degree = 64u32;
    let gens: Vec<Vec<u32>> = (0..4)
        .map(|_| (0..degree).map(|_| rng.gen_range(0..degree)).collect())
        .collect();

    let mut action = enumerated(&gens, 0);
    let n = action.current_size();
    assert!(n >= 1 && n <= degree as usize);

    let scc = action.scc().unwrap();
    let covered: usize = scc.components().iter().map(Vec::len).sum();
    assert_eq!(covered, n);

    for i in 0..n as u32 {
        let index = PointIndex::new(i);
        let point = *action.at(index).unwrap();
        let root = action.root_of_scc_at(index).unwrap();
        let root_point = *action.at(root).unwrap();
        let m = action.multiplier_to_scc_root(index).unwrap();
        assert_eq!(m.act(&point), root_point);
    }
}

#[test]
fn partial_snapshot_is_queryable_and_consistent() {
    let mut action = RightAction::<u32, Transf>::new();
    action.add_seed(0).unwrap();
    action
        .add_generator(Transf(vec![1, 2, 3, 4, 5, 6, 7, 0]))
        .unwrap();
    action.enumerate(4).unwrap();
    let before = action.current_size();
    assert!(before >= 4 && !action.finished());

    // SCCs of the partial snapshot cover exactly the discovered nodes.
    let scc = action.scc().unwrap();
    let covered: usize = scc.components().iter().map(Vec::len).sum();
    assert_eq!(covered, before);

    // Monotonicity: resuming only grows the orbit, indices are stable.
    let p1 = action.position(&1).unwrap();
    action.run().unwrap();
    assert!(action.current_size() >= before);
    assert_eq!(action.position(&1).unwrap(), p1);
    assert_eq!(action.current_size(), 8);
}
