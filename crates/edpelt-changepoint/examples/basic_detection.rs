//! Basic change point detection example
//!
//! Run with `RUST_LOG=edpelt_changepoint=debug` to see the detector's
//! internal progress.

use edpelt_changepoint::{
    BatchDetector, ChangePointDetectorProperties, EdPeltDetector, SimpleDetector,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== ED-PELT Change Point Examples ===\n");

    let detector = EdPeltDetector::new();

    // Example 1: piecewise constant levels
    println!("1. Step changes");
    let data1: Vec<f64> = (0..18)
        .map(|i| match i {
            0..=5 => 0.0,
            6..=11 => 1.0,
            _ => 2.0,
        })
        .collect();
    let result1 = detector.detect_simple(&data1)?;
    println!("  Data: 0 -> 1 -> 2 in blocks of six");
    println!("  Changepoints: {:?}", result1.changepoints());
    println!("  Segments: {:?}", result1.segments());

    // Example 2: scale change in normal noise
    println!("\n2. Variance change");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let narrow = Normal::new(0.0, 1.0)?;
    let wide = Normal::new(0.0, 8.0)?;
    let data2: Vec<f64> = (0..300)
        .map(|i| {
            if i < 150 {
                narrow.sample(&mut rng)
            } else {
                wide.sample(&mut rng)
            }
        })
        .collect();
    let result2 = detector.detect_simple(&data2)?;
    println!("  Data: sd 1 for 150 points, then sd 8");
    print!("{result2}");

    // Example 3: minimum segment length
    println!("\n3. Minimum segment length");
    for min_distance in [1, 10, 50] {
        let constrained = EdPeltDetector::with_min_distance(min_distance);
        let result = constrained.detect_simple(&data2)?;
        println!(
            "  {} with min_distance = {:>2}: {:?}",
            constrained.algorithm_name(),
            min_distance,
            result.changepoints()
        );
    }

    // Example 4: many series at once
    println!("\n4. Batch detection");
    let series: Vec<Vec<f64>> = (0..4)
        .map(|shift| {
            (0..200)
                .map(|i| narrow.sample(&mut rng) + if i >= 100 { shift as f64 * 2.0 } else { 0.0 })
                .collect()
        })
        .collect();
    let slices: Vec<&[f64]> = series.iter().map(Vec::as_slice).collect();
    for (shift, result) in detector.detect_batch(&slices)?.iter().enumerate() {
        println!("  shift {:.1}: {:?}", shift as f64 * 2.0, result.changepoints());
    }

    Ok(())
}
