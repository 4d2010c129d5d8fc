use graph_engine_core::{EdgeRecord, Graph, Orientation, Vertex, Weight};
use std::time::{Duration, Instant};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-engine-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  chain       Single path, one edge per vertex (deepest trees)");
        println!("  star        Hub with every other vertex as a leaf");
        println!("  ring        Cycle plus random chords (many equal-weight ties)");
        println!("  random      Erdos-Renyi uniform random weighted edges");
        println!("  grid        Square lattice with random weights");
        println!();
        println!("Default vertex_count: 1000 (the matrix is dense, so memory grows with n^2)");
        return;
    }

    println!("graph-engine-bench");
    println!("==================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "chain" => vec![("Chain", gen_chain)],
        "star" => vec![("Star", gen_star)],
        "ring" => vec![("Ring with chords", gen_ring)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "grid" => vec![("Grid lattice", gen_grid)],
        "all" => vec![
            ("Chain", gen_chain as fn(usize) -> Graph),
            ("Star", gen_star),
            ("Ring with chords", gen_ring),
            ("Erdos-Renyi random", gen_random),
            ("Grid lattice", gen_grid),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, vertex_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = generator(vertex_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.1}ms: {} vertices, {} edges, ~{:.1}MB",
        ms(gen_time),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    println!();
    println!("{:>20} {:>12} {:>10}", "operation", "result", "time");
    println!("{:->20} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let from_matrix = graph_engine_core::matrix_to_list(&graph);
    println!(
        "{:>20} {:>12} {:>8.2}ms",
        "matrix_to_list",
        from_matrix.entry_count(),
        ms(t.elapsed())
    );

    let t = Instant::now();
    let from_edges = graph_engine_core::edges_to_list(&graph);
    println!(
        "{:>20} {:>12} {:>8.2}ms",
        "edges_to_list",
        from_edges.entry_count(),
        ms(t.elapsed())
    );

    let t = Instant::now();
    let rebuilt = graph_engine_core::list_to_matrix(&from_matrix, graph.vertex_count());
    let round_trip = match rebuilt {
        Ok(m) if &m == graph.matrix() => "exact",
        Ok(_) => "MISMATCH",
        Err(_) => "error",
    };
    println!(
        "{:>20} {:>12} {:>8.2}ms",
        "list_to_matrix",
        round_trip,
        ms(t.elapsed())
    );

    let t = Instant::now();
    let degrees = graph_engine_core::compute_degrees(&graph);
    let max_degree = degrees.total().iter().copied().max().unwrap_or(0);
    println!(
        "{:>20} {:>12} {:>8.2}ms",
        "compute_degrees",
        format!("max {}", max_degree),
        ms(t.elapsed())
    );

    let t = Instant::now();
    match graph_engine_core::minimum_spanning_tree(&graph, 0) {
        Ok(mst) => println!(
            "{:>20} {:>12} {:>8.2}ms",
            "spanning_tree",
            format!("w={}", mst.total_weight),
            ms(t.elapsed())
        ),
        Err(e) => println!("{:>20} error: {}", "spanning_tree", e),
    }

    let t = Instant::now();
    match graph_engine_core::shortest_paths(&graph, 0) {
        Ok(sp) => {
            let elapsed = t.elapsed();
            let reachable = sp.distance.iter().filter(|d| d.is_reachable()).count();
            println!(
                "{:>20} {:>12} {:>8.2}ms",
                "shortest_paths",
                format!("{} reach", reachable),
                ms(elapsed)
            );
            let far = graph.vertex_count().saturating_sub(1);
            match sp.path_to(far) {
                Some(p) => println!(
                    "{:>20} 0 → {}: {} hops, distance {}",
                    "",
                    far,
                    p.len() - 1,
                    sp.distance[far]
                ),
                None => println!("{:>20} 0 → {}: no path", "", far),
            }
        }
        Err(e) => println!("{:>20} error: {}", "shortest_paths", e),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators (deterministic, single-threaded)
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn weight(&mut self) -> Weight {
        self.next(100) as Weight + 1
    }
    fn vertex(&mut self, n: usize) -> Vertex {
        self.next(n as u64) as Vertex
    }
}

fn build(n: usize, edges: Vec<EdgeRecord>) -> Graph {
    // Generators only emit in-range endpoints
    Graph::build(n, Orientation::Undirected, true, edges)
        .unwrap_or_else(|e| panic!("generator produced an invalid graph: {}", e))
}

/// Path 0 - 1 - ... - (n-1) with random weights. Dijkstra and the tree both
/// walk the full length.
fn gen_chain(n: usize) -> Graph {
    let mut rng = FastRng::new(42);
    let edges = (1..n)
        .map(|v| EdgeRecord::weighted(v - 1, v, rng.weight()))
        .collect();
    build(n, edges)
}

/// Hub 0 linked to every other vertex. The frontier grows to n-1 edges in
/// the first step.
fn gen_star(n: usize) -> Graph {
    let mut rng = FastRng::new(12345);
    let edges = (1..n)
        .map(|v| EdgeRecord::weighted(0, v, rng.weight()))
        .collect();
    build(n, edges)
}

/// Ring of unit weights plus random unit chords: every crossing edge ties,
/// so the tree shape is decided entirely by insertion order.
fn gen_ring(n: usize) -> Graph {
    let mut rng = FastRng::new(67890);
    let mut edges: Vec<EdgeRecord> = (0..n)
        .map(|v| EdgeRecord::weighted(v, (v + 1) % n.max(1), 1))
        .collect();
    for _ in 0..n / 4 {
        let a = rng.vertex(n);
        let b = rng.vertex(n);
        if a != b {
            edges.push(EdgeRecord::weighted(a, b, 1));
        }
    }
    build(n, edges)
}

/// Erdos-Renyi: ~5 random weighted edges per vertex, no structure.
fn gen_random(n: usize) -> Graph {
    let mut rng = FastRng::new(54321);
    let mut edges = Vec::with_capacity(n * 5);
    for _ in 0..n * 5 {
        let a = rng.vertex(n);
        let b = rng.vertex(n);
        if a != b {
            edges.push(EdgeRecord::weighted(a, b, rng.weight()));
        }
    }
    build(n, edges)
}

/// Square lattice, side = floor(sqrt(n)), random weights on every link.
fn gen_grid(n: usize) -> Graph {
    let side = (n as f64).sqrt() as usize;
    let count = side * side;
    let mut rng = FastRng::new(99999);
    let mut edges = Vec::with_capacity(count * 2);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                edges.push(EdgeRecord::weighted(v, v + 1, rng.weight()));
            }
            if row + 1 < side {
                edges.push(EdgeRecord::weighted(v, v + side, rng.weight()));
            }
        }
    }
    build(count, edges)
}
