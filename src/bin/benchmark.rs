//! Serial vs parallel stepping across grid sizes

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use voxel_life::{StepStrategy, VoxelGrid};

fn benchmark(strategy: StepStrategy, edge: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(edge as u64);
    let mut grid = match VoxelGrid::random(edge, 0.3, &mut rng) {
        Ok(grid) => grid,
        Err(err) => {
            log::error!("{err}");
            return f64::NAN;
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        grid = strategy.step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== 3D Life Step Benchmark ===\n");

    let edges = [10, 32, 64, 96, 128, 192];
    let iterations = 10;

    println!("{:>10} {:>12} {:>12} {:>10}", "Edge", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for edge in edges {
        let serial_ms = benchmark(StepStrategy::Serial, edge, iterations);
        let parallel_ms = benchmark(StepStrategy::Parallel, edge, iterations);
        println!(
            "{:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{edge}^3"),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let edge = 128;
    let cells = edge * edge * edge;
    let parallel_ms = benchmark(StepStrategy::Parallel, edge, iterations);
    println!("\n=== Throughput at {edge}^3 ===\n");
    println!(
        "Parallel: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
