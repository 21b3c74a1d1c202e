//! End-to-end scenarios exercising the full facade: seeding, enumeration,
//! SCC queries, and multiplier reconstruction.

mod common;

use common::Transf;
use orbit_action::prelude::*;

#[test]
fn swap_orbit_has_one_component() {
    // Seed p0; one generator swapping p0 and p1.
    let mut action = RightAction::<u32, Transf>::new();
    action.add_seed(0).unwrap();
    action.add_generator(Transf(vec![1, 0])).unwrap();
    action.run().unwrap();

    assert_eq!(action.current_size(), 2);
    let g = action.word_graph();
    assert_eq!(
        g.target(PointIndex::new(0), 0).unwrap(),
        Some(PointIndex::new(1))
    );
    assert_eq!(
        g.target(PointIndex::new(1), 0).unwrap(),
        Some(PointIndex::new(0))
    );

    let scc = action.scc().unwrap();
    assert_eq!(scc.number_of_components(), 1);
    assert_eq!(scc.roots(), &[PointIndex::new(0)]);
    assert_eq!(
        scc.component_of(PointIndex::new(0)).unwrap(),
        &[PointIndex::new(0), PointIndex::new(1)]
    );

    let m = action.multiplier_to_scc_root(PointIndex::new(1)).unwrap();
    assert_eq!(m, Transf(vec![1, 0]));
}

#[test]
fn chain_with_sink_splits_into_singletons() {
    // g1 drives the chain p0 -> p1 -> p2 -> p2; g2 maps everything to p2.
    let mut action = RightAction::<u32, Transf>::new();
    action.add_seed(0).unwrap();
    action.add_generator(Transf(vec![1, 2, 2])).unwrap();
    action.add_generator(Transf(vec![2, 2, 2])).unwrap();
    assert_eq!(action.size().unwrap(), 3);

    let scc = action.scc().unwrap();
    assert_eq!(scc.number_of_components(), 3);
    for i in 0..3u32 {
        let index = PointIndex::new(i);
        assert_eq!(scc.component_of(index).unwrap(), &[index]);
        assert_eq!(scc.root_of(index).unwrap(), index);
    }
    // Both singleton components point into {p2}.
    let g = action.word_graph();
    for i in 0..2u32 {
        assert_eq!(
            g.target(PointIndex::new(i), 1).unwrap(),
            Some(PointIndex::new(2))
        );
    }
}

#[test]
fn multiple_seeds_and_interleaved_building() {
    let mut action = RightAction::<u32, Transf>::new();
    action.add_seed(0).unwrap();
    action.add_generator(Transf(vec![1, 0, 3, 2])).unwrap();
    action.run().unwrap();
    assert_eq!(action.current_size(), 2);

    // A second seed in a disjoint part of the domain.
    action.add_seed(2).unwrap();
    assert!(!action.finished());
    action.run().unwrap();
    assert!(action.finished());
    assert_eq!(action.current_size(), 4);

    // Two swaps, two components, rooted at the respective seeds.
    let scc = action.scc().unwrap();
    assert_eq!(scc.number_of_components(), 2);
    assert_eq!(
        action.root_of_scc(&1).unwrap(),
        action.root_of_scc(&0).unwrap()
    );
    assert_ne!(
        action.root_of_scc(&2).unwrap(),
        action.root_of_scc(&0).unwrap()
    );
}

#[test]
fn full_transformation_monoid_on_three_points() {
    // <cycle, transposition, collapse> acting on 0..3 generates all of
    // {0,1,2} -> {0,1,2}; the orbit of point 0 is the whole domain.
    let mut action = RightAction::<u32, Transf>::new();
    action.add_seed(0).unwrap();
    action.add_generator(Transf(vec![1, 2, 0])).unwrap();
    action.add_generator(Transf(vec![1, 0, 2])).unwrap();
    action.add_generator(Transf(vec![0, 0, 2])).unwrap();
    assert_eq!(action.size().unwrap(), 3);

    // The permutation generators keep the domain strongly connected.
    let scc = action.scc().unwrap();
    assert_eq!(scc.number_of_components(), 1);

    for i in 0..3u32 {
        let index = PointIndex::new(i);
        let point = *action.at(index).unwrap();
        let root = action.root_of_scc_at(index).unwrap();
        let root_point = *action.at(root).unwrap();
        let to_root = action.multiplier_to_scc_root(index).unwrap();
        assert_eq!(to_root.act(&point), root_point);
        let from_root = action.multiplier_from_scc_root(index).unwrap();
        assert_eq!(from_root.act(&root_point), point);
    }
}

#[test]
fn root_of_scc_for_undiscovered_point_fails() {
    let mut action = RightAction::<u32, Transf>::new();
    action.add_seed(0).unwrap();
    action.add_generator(Transf(vec![0, 1, 2])).unwrap();
    action.run().unwrap();
    assert!(action.root_of_scc(&2).is_err());
    assert_eq!(action.position(&2), None);
}

#[test]
fn word_graph_survives_serialization() {
    let mut action = RightAction::<u32, Transf>::new();
    action.add_seed(0).unwrap();
    action.add_generator(Transf(vec![1, 2, 0])).unwrap();
    action.run().unwrap();

    let json = serde_json::to_string(action.word_graph()).unwrap();
    let restored: WordGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, action.word_graph());
    assert_eq!(restored.number_of_edges(), 3);
}

#[test]
fn reserve_does_not_disturb_enumeration() {
    let mut action = RightAction::<u32, Transf>::new();
    action.reserve(1000);
    action.add_seed(0).unwrap();
    action.add_generator(Transf(vec![1, 2, 3, 4, 0])).unwrap();
    assert_eq!(action.size().unwrap(), 5);
}
