use detour_sssp::graph::generators::{grid_network, random_network};
use detour_sssp::graph::{Detour, DetourGraph, DetourSpec, Edge, Graph};
use detour_sssp::Error;

fn sorted_edges(graph: &DetourGraph<u64>) -> Vec<(usize, usize, u64)> {
    let mut edges: Vec<_> = graph.edges().map(|e| (e.from, e.to, e.weight)).collect();
    edges.sort();
    edges
}

#[test]
fn test_construction_sizes_and_adjacency() {
    let edges: Vec<Edge<u64>> = vec![
        (0, 1, 2).into(),
        (1, 2, 2).into(),
        (2, 3, 2).into(),
        (0, 1, 5).into(),
    ];
    let detours: Vec<DetourSpec<u64>> = vec![(1, 4, 3).into()];
    let graph = DetourGraph::new(&edges, &detours).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
    assert_eq!(graph.get_edge_weight(0, 1), Some(2));
    assert_eq!(graph.outgoing_edges(3).count(), 0);
    assert_eq!(graph.detour(1), Some(Detour { cost: 4, target: 3 }));
    assert_eq!(graph.detour(0), None);
    assert_eq!(graph.detour_nodes().map(|(node, _)| node).collect::<Vec<_>>(), vec![1]);
    assert_eq!(graph.sink(), None);
}

#[test]
fn test_invalid_references_rejected() {
    let edges: Vec<Edge<u64>> = vec![(0, 1, 1).into()];

    let bad_node = DetourGraph::new(&edges, &[DetourSpec::new(2, 1, 0)]).unwrap_err();
    assert!(matches!(bad_node, Error::InvalidNodeReference { node: 2, count: 2 }));

    let bad_target = DetourGraph::new(&edges, &[DetourSpec::new(0, 1, 7)]).unwrap_err();
    assert!(matches!(bad_target, Error::InvalidNodeReference { node: 7, count: 2 }));

    let too_small = DetourGraph::with_vertex_count(1, &edges, &[]).unwrap_err();
    assert!(matches!(too_small, Error::InvalidVertexCount { declared: 1, required: 2 }));

    // A declared range may include nodes no edge touches
    let wide = DetourGraph::with_vertex_count(5, &edges, &[DetourSpec::new(4, 0, 3)]).unwrap();
    assert_eq!(wide.vertex_count(), 5);
}

#[test]
fn test_empty_edge_list_gives_empty_graph() {
    let graph = DetourGraph::<u64>::new(&[], &[]).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edges().count(), 0);
}

#[test]
fn test_reverse_adds_wired_sink() {
    let edges: Vec<Edge<u64>> = vec![(0, 1, 2).into(), (1, 2, 3).into()];
    let graph = DetourGraph::new(&edges, &[DetourSpec::new(0, 1, 2)]).unwrap();
    let reversed = graph.reverse(&[2, 1, 2]).unwrap();

    assert_eq!(reversed.vertex_count(), 4);
    assert_eq!(reversed.sink(), Some(3));
    assert_eq!(sorted_edges(&reversed), vec![(1, 0, 2), (2, 1, 3), (3, 1, 0), (3, 2, 0)]);
    assert_eq!(reversed.edge_count(), 4);
    assert_eq!(reversed.detour(0), None);

    // Reversing leaves the input graph untouched
    assert_eq!(sorted_edges(&graph), vec![(0, 1, 2), (1, 2, 3)]);
    assert!(graph.detour(0).is_some());

    let err = graph.reverse(&[3]).unwrap_err();
    assert!(matches!(err, Error::InvalidNodeReference { node: 3, count: 3 }));
}

#[test]
fn test_terminals_lose_outgoing_edges() {
    let edges: Vec<Edge<u64>> = vec![(0, 1, 2).into(), (1, 2, 3).into(), (1, 0, 1).into()];
    let graph = DetourGraph::new(&edges, &[DetourSpec::new(1, 4, 2)]).unwrap();
    let truncated = graph.with_terminals(&[1, 1]).unwrap();

    assert_eq!(truncated.vertex_count(), 3);
    assert_eq!(sorted_edges(&truncated), vec![(0, 1, 2)]);
    assert_eq!(truncated.edge_count(), 1);
    assert_eq!(truncated.detour(1), Some(Detour { cost: 4, target: 2 }));
    assert_eq!(graph.edge_count(), 3);

    let err = graph.with_terminals(&[0, 5]).unwrap_err();
    assert!(matches!(err, Error::InvalidNodeReference { node: 5, count: 3 }));
}

#[test]
fn test_double_reverse_restores_edges() {
    for seed in 0..10 {
        let network = random_network(15, 40, 3, 9, seed);
        let graph = DetourGraph::with_vertex_count(15, &network.edges, &network.detours).unwrap();
        let exits = [0, 7, 14];

        let twice = graph.reverse(&exits).unwrap().reverse(&[]).unwrap();
        let sink = 15;
        let mut restored: Vec<_> = twice
            .edges()
            .filter(|e| e.from != sink && e.to != sink)
            .map(|e| (e.from, e.to, e.weight))
            .collect();
        restored.sort();
        assert_eq!(restored, sorted_edges(&graph), "seed {}", seed);
    }
}

#[test]
fn test_grid_network_shape() {
    let edges = grid_network(3, 2);
    let graph = DetourGraph::new(&edges, &[]).unwrap();
    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 7);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(0, 3));
    assert!(!graph.has_edge(2, 3));
}
