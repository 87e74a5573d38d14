use std::time::{Duration, Instant};
use detour_sssp::graph::generators::random_network;
use detour_sssp::{DetourGraph, RouteComposer};

// Function to benchmark one escape query on a seeded random network
fn benchmark_query(size: usize, edge_factor: usize, seed: u64) -> (Duration, Option<u64>) {
    let network = random_network(size, size * edge_factor, size / 50, 100, seed);
    let graph = DetourGraph::with_vertex_count(network.vertices, &network.edges, &network.detours)
        .expect("generated network is valid");
    let exits: Vec<usize> = (size - size / 100..size).collect();

    let composer = RouteComposer::new();
    let start = Instant::now();
    let route = composer.find_route(&graph, 0, &exits).expect("query is valid");
    (start.elapsed(), route.map(|r| r.cost))
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 3;

    println!("=====================================================");
    println!("Benchmark: escape route (forward + backward Dijkstra)");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    println!("{:<10} | {:<12} | {:<10}", "Vertices", "Time (ms)", "Cost");
    println!("-----------------------------------------------------");
    for &size in &graph_sizes {
        let (elapsed, cost) = benchmark_query(size, edge_factor, size as u64);
        let cost = cost.map_or_else(|| "none".to_string(), |c| c.to_string());
        println!("{:<10} | {:<12.2} | {:<10}", size, elapsed.as_secs_f64() * 1000.0, cost);
    }
}
