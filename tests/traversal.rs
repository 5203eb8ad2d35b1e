use adjgraph::{
    bfs_levels, bfs_search, dfs_search, AdjacencyGraph, BreadthFirst, DepthFirst, SearchConfig,
    Strategy, TraversalKind,
};

fn sample() -> AdjacencyGraph<i32> {
    AdjacencyGraph::from_edges([(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (5, 6)])
}

#[test]
fn bfs_expands_level_by_level() {
    let graph = sample();
    assert_eq!(bfs_levels(&graph, &1), vec![vec![1], vec![2, 3], vec![4, 5, 6]]);

    let outcome = bfs_search(&graph, &1, &6);
    assert!(outcome.found);
    // Level 0, then level 1, then level 2 up to the target.
    assert_eq!(outcome.visit_order, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(outcome.depth(), Some(2));
}

#[test]
fn dfs_backtracks_from_dead_end() {
    let outcome = dfs_search(&sample(), &1, &6);
    assert!(outcome.found);
    assert_eq!(outcome.visit_order, vec![1, 2, 4, 5, 6]);
    assert_eq!(outcome.path, Some(vec![1, 2, 5, 6]));
}

#[test]
fn self_reachability_needs_no_neighbors() {
    let mut graph = AdjacencyGraph::new();
    graph.add_vertex(1);
    graph.add_edge(2, 3);

    for kind in TraversalKind::ALL {
        let outcome = kind.search(&graph, &1, &1, &SearchConfig::default());
        assert!(outcome.found, "{kind}");
        assert_eq!(outcome.visit_order, vec![1]);
        assert_eq!(outcome.depth(), Some(0));

        // Even a vertex the graph has never seen reaches itself.
        assert!(kind.search(&graph, &9, &9, &SearchConfig::default()).found);
    }
}

#[test]
fn missing_start_or_target_is_not_found() {
    let graph = sample();
    for kind in TraversalKind::ALL {
        let from_missing = kind.search(&graph, &42, &1, &SearchConfig::default());
        assert!(!from_missing.found);
        assert!(from_missing.visit_order.is_empty());

        let to_missing = kind.search(&graph, &1, &42, &SearchConfig::default());
        assert!(!to_missing.found);
        assert_eq!(to_missing.visited_count(), 6);
        assert_eq!(to_missing.path, None);
    }
}

#[test]
fn disconnected_components_are_unreachable() {
    let mut graph = sample();
    graph.add_edge(10, 11);
    assert!(!graph.is_reachable(&1, &11));
    assert!(!dfs_search(&graph, &11, &1).found);
    assert!(graph.is_reachable(&11, &10));
}

#[test]
fn mutation_changes_reachability() {
    let mut graph = sample();
    graph.remove_edge(&5, &6);
    assert!(graph.is_reachable(&4, &6));

    graph.remove_edge(&1, &3);
    assert!(!bfs_search(&graph, &4, &6).found);
    assert!(!dfs_search(&graph, &4, &6).found);
}

#[test]
fn strategies_are_interchangeable_behind_the_trait() {
    let graph = sample();
    let strategies: [&dyn Strategy<i32>; 2] = [&BreadthFirst, &DepthFirst];
    let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["breadth-first", "depth-first"]);

    for strategy in strategies {
        let outcome = strategy.search(&graph, &4, &3, &SearchConfig::default());
        assert!(outcome.found, "{}", strategy.name());
        let path = outcome.path.unwrap();
        assert_eq!(path.first(), Some(&4));
        assert_eq!(path.last(), Some(&3));
        for pair in path.windows(2) {
            assert!(graph.has_edge(&pair[0], &pair[1]));
        }
    }
}

#[test]
fn outcome_serializes_for_reports() {
    let outcome = bfs_search(&sample(), &1, &3);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["visit_order"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["path"], serde_json::json!([1, 3]));
}

#[cfg(feature = "parallel")]
#[test]
fn search_many_matches_sequential_searches() {
    let graph = sample();
    let targets = [6, 4, 42, 1];
    let config = SearchConfig::default();
    let outcomes = adjgraph::search_many(&graph, TraversalKind::DepthFirst, &1, &targets, &config);
    let expected: Vec<_> = targets
        .iter()
        .map(|t| TraversalKind::DepthFirst.search(&graph, &1, t, &config))
        .collect();
    assert_eq!(outcomes, expected);
}
