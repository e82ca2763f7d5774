use blocksim::{
    find_fast_reconnection, find_minimal_reconnection, identify_components, simulate_block,
    verify_connectivity, BlockOutcome, BlockSimulator, Component, Profile, ReconnectConfig,
    Representative, SocialGraph, User, UserId, UserPair,
};

const A: UserId = UserId(1);
const B: UserId = UserId(2);
const C: UserId = UserId(3);
const D: UserId = UserId(4);
const E: UserId = UserId(5);
const F: UserId = UserId(6);
const G: UserId = UserId(7);

fn users(ids: &[UserId]) -> SocialGraph {
    let names = ["", "Ana", "Bruno", "Carlos", "Diana", "Elena", "Franco", "Gloria"];
    let mut g = SocialGraph::new();
    for &id in ids {
        let name = names.get(id.0 as usize).copied().unwrap_or("Other");
        g.add_user(User::new(id, name, Profile::Student));
    }
    g
}

fn with_path(ids: &[UserId]) -> SocialGraph {
    let mut g = users(ids);
    for w in ids.windows(2) {
        g.add_edge(w[0], w[1], 1);
    }
    g
}

fn set(ids: &[UserId]) -> Component {
    ids.iter().copied().collect()
}

fn spans(pair: &UserPair, left: &Component, right: &Component) -> bool {
    (left.contains(&pair.first) && right.contains(&pair.second))
        || (left.contains(&pair.second) && right.contains(&pair.first))
}

#[test]
fn ring_survives_a_block() {
    // A -- B -- C -- D -- A
    let mut g = with_path(&[A, B, C, D]);
    g.add_edge(D, A, 1);

    let r = simulate_block(&g, A, B);
    assert!(r.still_connected());
    assert_eq!(r.edges_needed(), 0);
    assert!(r.suggested_edges().is_empty());
    assert_eq!(r.outcome(), BlockOutcome::StillConnected);
    assert_eq!(r.message(), "graph remains connected");
    assert_eq!(r.blocker(), A);
    assert_eq!(r.blocked(), B);
}

#[test]
fn bridge_block_needs_one_edge_across_the_cut() {
    // A -- B -- C
    let g = with_path(&[A, B, C]);

    let r = simulate_block(&g, A, B);
    assert!(!r.still_connected());
    assert_eq!(r.edges_needed(), 1);
    assert!(spans(&r.suggested_edges()[0], &set(&[A]), &set(&[B, C])));
    assert_eq!(r.message(), "1 new connections required");
}

#[test]
fn chain_split_in_the_middle() {
    // A -- B -- C -- D -- E, block B -- C
    let g = with_path(&[A, B, C, D, E]);

    let mut cut = g.copy();
    assert!(cut.remove_edge(B, C));
    let comps = identify_components(&cut);
    assert_eq!(comps, vec![set(&[A, B]), set(&[C, D, E])]);

    let r = simulate_block(&g, B, C);
    assert_eq!(r.outcome(), BlockOutcome::Disconnected { components: 2 });
    assert_eq!(r.edges_needed(), 1);
    assert!(spans(&r.suggested_edges()[0], &comps[0], &comps[1]));
}

#[test]
fn minimal_and_greedy_agree_on_count() {
    // A -- B -- G -- C -- D -- E -- F, block B -- G
    let g = with_path(&[A, B, G, C, D, E, F]);

    let mut sim = BlockSimulator::default();
    let r = sim.simulate_block(&g, B, G);
    assert!(!r.still_connected());
    assert_eq!(r.edges_needed(), 1);

    let mut cut = g.copy();
    cut.remove_edge(B, G);
    assert_eq!(identify_components(&cut).len(), 2);

    let minimal = find_minimal_reconnection(&cut);
    let greedy = find_fast_reconnection(&cut);
    assert_eq!(minimal.len(), 1);
    assert_eq!(greedy.len(), 1);

    for edges in [&minimal, &greedy] {
        let mut fixed = cut.copy();
        for p in edges.iter() {
            fixed.add_edge(p.first, p.second, 1);
        }
        assert!(verify_connectivity(&fixed));
    }
}

#[test]
fn missing_relationship_leaves_graph_untouched() {
    let mut g = with_path(&[A, B]);
    g.add_user(User::new(C, "Carlos", Profile::Student));
    assert!(!verify_connectivity(&g));

    let mut sim = BlockSimulator::default();
    let r = sim.simulate_block(&g, A, D);
    assert!(r.still_connected());
    assert_eq!(r.edges_needed(), 0);
    assert_eq!(r.message(), "no connection to remove");
    assert_eq!(sim.nodes_explored(), 0);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn complete_graph_is_robust() {
    let ids: Vec<UserId> = (10..14).map(UserId).collect();
    let mut g = users(&ids);
    for (i, &u) in ids.iter().enumerate() {
        for &v in &ids[i + 1..] {
            g.add_edge(u, v, 1);
        }
    }
    assert_eq!(g.edge_count(), 6);

    let r = simulate_block(&g, ids[0], ids[1]);
    assert!(r.still_connected());
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn star_center_isolation_splits_off_a_leaf() {
    let center = UserId(20);
    let leaves: Vec<UserId> = (21..26).map(UserId).collect();
    let mut g = users(&[center]);
    for &leaf in &leaves {
        g.add_user(User::new(leaf, format!("Leaf{}", leaf.0), Profile::Student));
        g.add_edge(center, leaf, 1);
    }

    let r = simulate_block(&g, center, leaves[2]);
    assert_eq!(r.outcome(), BlockOutcome::Disconnected { components: 2 });
    assert_eq!(r.edges_needed(), 1);
    assert!(r.suggested_edges()[0].contains(leaves[2]));
}

#[test]
fn several_isolated_users_need_k_minus_one_edges() {
    let g = users(&[A, B, C, D, E]);
    let mut sim = BlockSimulator::default();

    let edges = sim.find_minimal_reconnection(&g);
    assert_eq!(edges.len(), 4);
    // 10 candidates for 5 components: the search must cut branches.
    assert!(sim.nodes_pruned() > 0);
    assert!(sim.stats().prune_ratio() > 0.0);

    let fast = sim.find_fast_reconnection(&g);
    assert_eq!(fast.len(), 4);
    assert_eq!(sim.nodes_explored(), 0);
}

#[test]
fn empty_and_single_vertex_graphs_are_trivially_fine() {
    let empty = SocialGraph::new();
    assert!(verify_connectivity(&empty));
    assert!(identify_components(&empty).is_empty());
    assert!(find_minimal_reconnection(&empty).is_empty());
    assert!(find_fast_reconnection(&empty).is_empty());
    assert!(simulate_block(&empty, A, B).still_connected());

    let single = users(&[A]);
    assert!(verify_connectivity(&single));
    assert_eq!(identify_components(&single).len(), 1);
    assert!(find_minimal_reconnection(&single).is_empty());
}

#[test]
fn strict_construction_builds_the_same_graph() {
    let built = SocialGraph::from_edges(
        [A, B, C].map(|id| User::new(id, format!("U{}", id.0), Profile::Student)),
        [(A, B, 3), (B, C, 4)],
    )
    .expect("valid edge list");
    assert_eq!(built.edge_count(), 2);
    assert_eq!(built.edge_weight(C, B), Some(4));

    let err =
        SocialGraph::from_edges([User::new(A, "Ana", Profile::Student)], [(A, B, 1)]).unwrap_err();
    assert_eq!(err.to_string(), "user #2 is not part of the graph");
}

#[test]
fn highest_degree_representatives_join_chain_middles() {
    let config =
        ReconnectConfig { representative: Representative::HighestDegree, ..Default::default() };
    let mut sim = BlockSimulator::new(config);

    // A -- B -- C -- D -- E -- F; blocking C/D leaves two chains with middles B and E.
    let g = with_path(&[A, B, C, D, E, F]);
    let r = sim.simulate_block(&g, C, D);
    assert_eq!(r.suggested_edges(), &[UserPair::new(B, E)]);

    // Four separate 3-user chains: (1,2,3), (4,5,6), (7,8,9), (10,11,12).
    let mut g = SocialGraph::new();
    for i in 1..=12u32 {
        g.add_user(User::new(i, format!("U{i}"), Profile::Student));
    }
    for start in [1u32, 4, 7, 10] {
        g.add_edge(UserId(start), UserId(start + 1), 1);
        g.add_edge(UserId(start + 1), UserId(start + 2), 1);
    }
    let middles = set(&[UserId(2), UserId(5), UserId(8), UserId(11)]);

    let edges = sim.find_minimal_reconnection(&g);
    assert_eq!(edges.len(), 3);
    assert!(edges.iter().all(|e| middles.contains(&e.first) && middles.contains(&e.second)));

    let mut repaired = g.copy();
    for e in &edges {
        repaired.add_edge(e.first, e.second, 1);
    }
    assert!(verify_connectivity(&repaired));
}
