use nearest_sssp::graph::generators::{generate_connected, generate_grid};
use nearest_sssp::graph::{find_dangling, fixtures, validate, validate_weights};
use nearest_sssp::{AdjacencyGraph, DanglingNeighbors, Dijkstra, Error, Graph};
use std::collections::HashMap;
use std::io::Write;

fn s(node: &str) -> String {
    node.to_string()
}

// A has an edge to Z, which has no adjacency entry of its own
fn dangling_graph() -> HashMap<&'static str, HashMap<&'static str, u32>> {
    HashMap::from([
        ("A", HashMap::from([("B", 1), ("Z", 2)])),
        ("B", HashMap::from([("A", 1)])),
    ])
}

#[test]
fn test_undirected_construction() {
    let graph = fixtures::reference_network::<u32>();

    assert_eq!(graph.node_count(), 11);
    assert_eq!(graph.edge_count(), 24);
    assert_eq!(graph.edge_weight(&s("B"), &s("E")), Some(6));
    assert_eq!(graph.edge_weight(&s("E"), &s("B")), Some(6));
    assert!(!graph.has_edge(&s("A"), &s("K")));
}

#[test]
fn test_from_edges_registers_both_endpoints() {
    let graph: AdjacencyGraph<String, u32> =
        vec![(s("A"), s("B"), 3), (s("A"), s("B"), 4)].into_iter().collect();

    assert!(graph.has_node(&s("B")));
    assert_eq!(graph.neighbors(&s("B")).count(), 0);
    // The last weight for a repeated edge wins
    assert_eq!(graph.edge_weight(&s("A"), &s("B")), Some(4));
}

#[test]
fn test_from_hash_map() {
    let graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::from(dangling_graph());
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(
        graph.adjacency_of(&"A").map(|edges| edges.keys().copied().collect::<Vec<_>>()),
        Some(vec!["B", "Z"])
    );
}

#[test]
fn test_json_round_trip_shape() {
    let json = r#"{"A": {"B": 5.0}, "B": {"A": 5.0, "C": 2.5}, "C": {}}"#;
    let graph: AdjacencyGraph<String, f64> =
        AdjacencyGraph::from_json_reader(json.as_bytes()).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_weight(&s("B"), &s("C")), Some(2.5));
    assert_eq!(
        serde_json::to_value(&graph).unwrap(),
        serde_json::json!({"A": {"B": 5.0}, "B": {"A": 5.0, "C": 2.5}, "C": {}})
    );
}

#[test]
fn test_json_file_loading() {
    let path = std::env::temp_dir().join(format!("nearest_sssp_graph_{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"A": {{"B": 1.0}}, "B": {{"A": 1.0}}}}"#).unwrap();
    }

    let graph: AdjacencyGraph<String, f64> = AdjacencyGraph::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(graph.edge_count(), 2);

    let missing: nearest_sssp::Result<AdjacencyGraph<String, f64>> =
        AdjacencyGraph::from_json_file(&path);
    assert!(matches!(missing, Err(Error::Io(_))));
}

#[test]
fn test_invalid_json_is_reported() {
    let result: nearest_sssp::Result<AdjacencyGraph<String, f64>> =
        AdjacencyGraph::from_json_reader(r#"{"A": {"B": "far"}}"#.as_bytes());
    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn test_validate_rejects_negative_weights() {
    let graph = AdjacencyGraph::undirected(vec![(s("A"), s("B"), 2i32), (s("B"), s("C"), -1)]);

    match validate_weights(&graph) {
        Err(Error::NegativeWeight { from, to }) => assert_eq!((from.as_str(), to.as_str()), ("B", "C")),
        other => panic!("expected NegativeWeight, got {:?}", other),
    }
    assert!(validate_weights(&fixtures::diamond::<i32>()).is_ok());
}

#[test]
fn test_validate_reports_dangling_neighbors() {
    let graph = dangling_graph();

    assert_eq!(find_dangling(&graph), Some((&"A", &"Z")));
    match validate(&graph) {
        Err(Error::MalformedGraph { node, neighbor }) => {
            assert_eq!(node, "A");
            assert_eq!(neighbor, "Z");
        }
        other => panic!("expected MalformedGraph, got {:?}", other),
    }
    assert!(validate(&fixtures::reference_network::<u32>()).is_ok());
}

#[test]
fn test_dangling_neighbor_tolerated_by_default() {
    let graph = dangling_graph();
    let dijkstra = Dijkstra::new();
    assert_eq!(dijkstra.dangling_policy(), DanglingNeighbors::Tolerate);

    let found = dijkstra.find_path_to_nearest_target(&graph, &"A", &["Z"]).unwrap();
    assert_eq!(found.distance, 2);
    assert_eq!(found.path, vec!["A", "Z"]);

    let table = dijkstra.compute_all_distances(&graph, &"A").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.distance(&"Z"), Some(2));
}

#[test]
fn test_dangling_neighbor_rejected_when_configured() {
    let graph = dangling_graph();
    let dijkstra = Dijkstra::new().with_dangling_policy(DanglingNeighbors::Reject);

    assert!(matches!(
        dijkstra.find_path_to_nearest_target(&graph, &"A", &["B"]),
        Err(Error::MalformedGraph { .. })
    ));
    assert!(matches!(
        dijkstra.compute_all_distances(&graph, &"A"),
        Err(Error::MalformedGraph { .. })
    ));
    // A well-formed graph is unaffected by the policy
    assert!(dijkstra
        .find_path_to_nearest_target(&fixtures::diamond::<u32>(), &s("A"), &[s("D")])
        .is_ok());
}

#[test]
fn test_unknown_start_checked_before_graph_shape() {
    let dijkstra = Dijkstra::new().with_dangling_policy(DanglingNeighbors::Reject);
    assert!(matches!(
        dijkstra.compute_all_distances(&dangling_graph(), &"Q"),
        Err(Error::UnknownStartNode(_))
    ));
}

#[test]
fn test_generated_graphs() {
    let graph: AdjacencyGraph<usize, u64> = generate_connected(100, 50, 10, 3);
    assert_eq!(graph.node_count(), 100);
    assert_eq!(graph, generate_connected(100, 50, 10, 3), "same seed, same graph");

    let table = Dijkstra::new().compute_all_distances(&graph, &0).unwrap();
    assert_eq!(table.reachable().count(), 100, "generated graphs are connected");

    let grid: AdjacencyGraph<usize, u32> = generate_grid(4, 3);
    assert_eq!(grid.node_count(), 12);
    // 3 horizontal edges per row, 4 vertical edges per row gap, both directions
    assert_eq!(grid.edge_count(), 2 * (3 * 3 + 4 * 2));

    let found = Dijkstra::new().find_path_to_nearest_target(&grid, &0, &[11]).unwrap();
    assert_eq!(found.distance, 3 + 2);

    let single: AdjacencyGraph<usize, u32> = generate_grid(1, 1);
    assert!(single.has_node(&0));
}
