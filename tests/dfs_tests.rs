use trellis::{GhostToken, Graph, GraphError, VertexState};

fn sample_matrix() -> [[u8; 5]; 5] {
    [
        [0, 1, 0, 0, 1],
        [1, 0, 1, 1, 1],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 0, 1],
        [1, 1, 0, 1, 0],
    ]
}

#[test]
fn sample_graph_forest() {
    GhostToken::new(|mut token| {
        let graph = Graph::from_matrix(&sample_matrix()).unwrap();
        let order = graph.dfs(&mut token);

        // 0 -> 1 -> 2 -> 3 -> 4 is one long tree path; finish order unwinds it.
        assert_eq!(order, vec![4, 3, 2, 1, 0]);

        let discovery: Vec<_> = graph.states(&token).map(|s| s.discovery_time).collect();
        let finish: Vec<_> = graph.states(&token).map(|s| s.finish_time).collect();
        let parents: Vec<_> = graph.states(&token).map(|s| s.parent).collect();
        assert_eq!(discovery, vec![1, 2, 3, 4, 5]);
        assert_eq!(finish, vec![10, 9, 8, 7, 6]);
        assert_eq!(parents, vec![None, Some(0), Some(1), Some(2), Some(3)]);
    });
}

#[test]
fn empty_graph_returns_empty_order() {
    GhostToken::new(|mut token| {
        let graph = Graph::from_edges(0, &[]).unwrap();
        assert!(graph.is_empty());
        assert!(graph.dfs(&mut token).is_empty());
    });
}

#[test]
fn clock_runs_across_disconnected_components() {
    GhostToken::new(|mut token| {
        // {0 -> 1}, {2 <-> 3}, {4}, {5 with a self-loop}
        let graph = Graph::from_edges(6, &[(0, 1), (2, 3), (3, 2), (5, 5)]).unwrap();
        let report = graph.dfs_report(&mut token);

        assert_eq!(report.order, vec![1, 0, 3, 2, 4, 5]);
        assert_eq!(report.roots, vec![0, 2, 4, 5]);

        let times: Vec<_> = report
            .vertices
            .iter()
            .map(|s| (s.discovery_time, s.finish_time))
            .collect();
        assert_eq!(times, vec![(1, 4), (2, 3), (5, 8), (6, 7), (9, 10), (11, 12)]);
        assert_eq!(report.check_brackets(), Ok(()));
    });
}

#[test]
fn edge_into_an_earlier_tree_is_not_a_tree_edge() {
    GhostToken::new(|mut token| {
        let graph = Graph::from_edges(2, &[(1, 0)]).unwrap();
        assert_eq!(graph.dfs(&mut token), vec![0, 1]);
        assert_eq!(graph.state(&token, 0).unwrap().parent, None);
        assert_eq!(graph.state(&token, 1).unwrap().parent, None);
        assert_eq!(graph.state(&token, 1).unwrap().discovery_time, 3);
    });
}

#[test]
fn every_vertex_is_visited_exactly_once() {
    GhostToken::new(|mut token| {
        // A cycle 0 -> 1 -> 2 -> 0 plus back-edges everywhere.
        let graph = Graph::from_lists(&[vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap();
        let mut order = graph.dfs(&mut token);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(graph.states(&token).all(|s| s.visited));
    });
}

#[test]
fn repeated_runs_are_identical() {
    GhostToken::new(|mut token| {
        let graph = Graph::from_matrix(&sample_matrix()).unwrap();
        let first = graph.dfs_report(&mut token);
        graph.bfs(&mut token, 2).unwrap();
        let second = graph.dfs_report(&mut token);
        assert_eq!(first, second);
    });
}

#[test]
fn dfs_after_bfs_clears_distances() {
    GhostToken::new(|mut token| {
        let graph = Graph::from_matrix(&sample_matrix()).unwrap();
        graph.bfs(&mut token, 0).unwrap();
        graph.dfs(&mut token);
        assert!(graph.states(&token).all(|s| !s.is_reached()));
    });
}

#[test]
fn single_tree_from_a_root() {
    GhostToken::new(|mut token| {
        // 2 -> 0 -> 1
        let graph = Graph::from_edges(3, &[(0, 1), (2, 0)]).unwrap();

        assert_eq!(graph.dfs_from(&mut token, 0).unwrap(), vec![1, 0]);
        assert_eq!(*graph.state(&token, 2).unwrap(), VertexState::INITIAL);

        assert_eq!(graph.dfs_from(&mut token, 2).unwrap(), vec![1, 0, 2]);
        let times: Vec<_> = graph
            .states(&token)
            .map(|s| (s.discovery_time, s.finish_time))
            .collect();
        assert_eq!(times, vec![(2, 5), (3, 4), (1, 6)]);

        assert_eq!(
            graph.dfs_from(&mut token, 3),
            Err(GraphError::OutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        );
    });
}

#[test]
fn deep_chain_does_not_overflow_the_stack() {
    const N: usize = 200_000;
    GhostToken::new(|mut token| {
        let edges: Vec<_> = (0..N - 1).map(|i| (i, i + 1)).collect();
        let graph = Graph::from_edges(N, &edges).unwrap();

        let order = graph.dfs(&mut token);
        assert_eq!(order.len(), N);
        assert_eq!(order[0], N - 1);
        assert_eq!(order[N - 1], 0);

        let last = graph.state(&token, N - 1).unwrap();
        assert_eq!(last.discovery_time, N as i64);
        assert_eq!(last.finish_time, N as i64 + 1);
        assert_eq!(graph.state(&token, 0).unwrap().finish_time, 2 * N as i64);

        assert_eq!(graph.path_to(&token, N - 1).unwrap().map(|p| p.len()), Some(N));
    });
}
