//! Draw repeated samples from an unnormalized normal density and print the
//! sample mean and standard deviation.
//!
//! Run with `RUST_LOG=slice_rs=debug` to see per-draw statistics.

use slice_rs::{chain_rng, sample_sequentially, SliceSampler, SliceSettings};

const MU: f64 = 10.;
const SIGMA: f64 = 100.;
const SAMPLE_SIZE: u64 = 100_000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let sampler = SliceSampler::new(SliceSettings {
        width: 5.,
        burnin: 100,
        ..Default::default()
    })?;
    let mut logp = |x: f64| -0.5 * (x - MU) * (x - MU) / (SIGMA * SIGMA);
    let mut rng = chain_rng(42, 0);

    let mut draws = Vec::with_capacity(SAMPLE_SIZE as usize);
    for draw in sample_sequentially(sampler, &mut logp, 0., SAMPLE_SIZE, 0, &mut rng) {
        let (value, progress) = draw?;
        println!("Point {}: {:.4}", progress.draw, value);
        draws.push(value);
    }

    let n = draws.len() as f64;
    let mean = draws.iter().sum::<f64>() / n;
    let var = draws.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.);
    println!("Mean={:.4}. Std={:.4}.", mean, var.sqrt());
    Ok(())
}
