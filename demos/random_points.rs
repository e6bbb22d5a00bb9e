//! K-means on uniformly random 3-D points.
//!
//! Run with `RUST_LOG=debug` to see the engine's round logging.

use kgroup::{Kmeans, DEFAULT_MAX_ITER};
use rand::prelude::*;

const N_POINTS: usize = 10_000;
const DIMS: usize = 3;
const K: usize = 5;
const PREVIEW: usize = 3;

fn main() -> kgroup::Result<()> {
    env_logger::init();

    let mut rng = rand::rng();
    let data: Vec<Vec<f64>> = (0..N_POINTS)
        .map(|_| (0..DIMS).map(|_| rng.random_range(-100.0..100.0)).collect())
        .collect();

    let fit = Kmeans::new(K).with_max_iter(DEFAULT_MAX_ITER).fit(&data)?;
    let groups = fit.groups(&data)?;

    println!("=== K-means (n={}, d={}, k={}) ===", N_POINTS, DIMS, K);
    println!(
        "  {} after {} rounds, inertia {:.1}",
        if fit.converged() { "converged" } else { "hit the cap" },
        fit.iterations(),
        fit.inertia(&data)?
    );

    for (i, group) in groups.iter().enumerate() {
        let center = match &fit.centers()[i] {
            Some(c) => format!("{:7.2?}", c),
            None => "-".to_string(),
        };
        println!("\n  cluster {} ({} points) center {}", i + 1, group.len(), center);
        for p in group.iter().take(PREVIEW) {
            println!("    {:7.2?}", p);
        }
        if group.len() > PREVIEW {
            println!("    ...");
        }
    }

    Ok(())
}
