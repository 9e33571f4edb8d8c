use nearest_sssp::batch::{distances_from_each, nearest_from_each};
use nearest_sssp::graph::fixtures;
use nearest_sssp::graph::generators::generate_connected;
use nearest_sssp::{AdjacencyGraph, Dijkstra, Error};

#[test]
fn test_nearest_from_each_keeps_input_order() {
    let graph = fixtures::reference_network::<u32>();
    let engine = Dijkstra::new();
    let starts: Vec<String> = ["A", "K", "Z", "F"].iter().map(|s| s.to_string()).collect();
    let targets = fixtures::reference_targets();

    let results = nearest_from_each(&engine, &graph, &starts, &targets);
    assert_eq!(results.len(), 4);

    let a = results[0].as_ref().unwrap();
    assert_eq!((a.target.as_str(), a.distance), ("H", 15));

    // K is itself a target
    let k = results[1].as_ref().unwrap();
    assert_eq!((k.target.as_str(), k.distance), ("K", 0));

    assert!(matches!(results[2], Err(Error::UnknownStartNode(_))));

    let f = results[3].as_ref().unwrap();
    assert_eq!((f.target.as_str(), f.distance), ("H", 8));
}

#[test]
fn test_batch_matches_sequential_queries() {
    let graph: AdjacencyGraph<usize, u64> = generate_connected(200, 300, 40, 11);
    let engine = Dijkstra::new();
    let starts: Vec<usize> = (0..200).step_by(7).collect();
    let targets = vec![3, 50, 120, 199];

    let parallel = nearest_from_each(&engine, &graph, &starts, &targets);
    for (start, result) in starts.iter().zip(&parallel) {
        let sequential = engine.find_path_to_nearest_target(&graph, start, &targets).unwrap();
        assert_eq!(result.as_ref().unwrap(), &sequential);
    }

    let tables = distances_from_each(&engine, &graph, &starts);
    for (start, table) in starts.iter().zip(tables) {
        assert_eq!(table.unwrap(), engine.compute_all_distances(&graph, start).unwrap());
    }
}
