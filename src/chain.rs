use rand::{rngs::SmallRng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    density::LogDensity,
    sampler::{Result, SliceSampler},
    uniform::UniformSource,
};

/// Information about one draw of [`sample_sequentially`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Progress {
    pub draw: u64,
    pub chain: u64,
    /// The number of slice sampling steps taken for this draw.
    pub num_steps: u64,
    pub logp_evals: u64,
    /// Expansions on both sides, summed over all steps.
    pub step_outs: u64,
    pub shrinks: u64,
}

/// Create the random number generator for a chain.
///
/// Each chain gets its own stream of a generator seeded with `seed`, so
/// chains with the same seed but different ids are independent.
pub fn chain_rng(seed: u64, chain: u64) -> SmallRng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(chain);
    SmallRng::from_rng(&mut rng)
}

/// Draw `draws` independent samples, each starting at `start`.
///
/// Every item is the result of a full [`SliceSampler::sample`] call. The
/// iterator stops after the first error.
pub fn sample_sequentially<'a, F, U>(
    sampler: SliceSampler,
    logp: &'a mut F,
    start: f64,
    draws: u64,
    chain: u64,
    rng: &'a mut U,
) -> impl Iterator<Item = Result<(f64, Progress)>> + 'a
where
    F: LogDensity + ?Sized,
    U: UniformSource + ?Sized,
{
    let mut failed = false;
    (0..draws).map_while(move |draw| {
        if failed {
            return None;
        }
        let result = sampler
            .sample_collect(start, &mut *logp, &mut *rng, &mut ())
            .map(|(value, stats)| {
                let progress = Progress {
                    draw,
                    chain,
                    num_steps: stats.steps,
                    logp_evals: stats.logp_evals,
                    step_outs: stats.step_out_left + stats.step_out_right,
                    shrinks: stats.shrinks,
                };
                (value, progress)
            });
        failed = result.is_err();
        Some(result)
    })
}
