use log::{debug, trace, warn};
use thiserror::Error;

use crate::{
    density::{CountingDensity, LogDensity},
    settings::{SliceSettings, STEP_OUT_GROWTH},
    stats::{Bracket, Collector, SampleStats, Side, StepInfo},
    uniform::UniformSource,
};

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SliceError {
    #[error("Initial width must be finite and positive, got {0}")]
    InvalidWidth(f64),
    #[error("Stepping out on the {side} side did not finish within {limit} expansions")]
    StepOutExceeded { side: Side, limit: u64 },
    #[error("Shrinkage did not accept a point within {limit} rejections")]
    ShrinkExceeded { limit: u64 },
}

pub type Result<T> = std::result::Result<T, SliceError>;

/// Univariate slice sampler with stepping out and shrinkage.
///
/// Each call to [`SliceSampler::sample`] runs `burnin` slice sampling steps
/// from the initial point and returns the final position.
#[derive(Debug, Clone, Copy)]
pub struct SliceSampler {
    settings: SliceSettings,
}

impl SliceSampler {
    /// Create a new sampler. This fails if the settings are invalid.
    pub fn new(settings: SliceSettings) -> Result<Self> {
        settings.validate()?;
        Ok(SliceSampler { settings })
    }

    pub fn settings(&self) -> &SliceSettings {
        &self.settings
    }

    /// Run `burnin` steps starting at `init` and return the final position.
    ///
    /// With `burnin == 0` this returns `init` without evaluating the density
    /// or drawing random numbers.
    pub fn sample<F, U>(&self, init: f64, logp: &mut F, rng: &mut U) -> Result<f64>
    where
        F: LogDensity + ?Sized,
        U: UniformSource + ?Sized,
    {
        self.sample_collect(init, logp, rng, &mut ())
            .map(|(position, _)| position)
    }

    /// Like [`SliceSampler::sample`], but report every event to `collector`
    /// and return statistics about the run.
    ///
    /// The random draws are the same as for `sample`.
    pub fn sample_collect<F, U, C>(
        &self,
        init: f64,
        logp: &mut F,
        rng: &mut U,
        collector: &mut C,
    ) -> Result<(f64, SampleStats)>
    where
        F: LogDensity + ?Sized,
        U: UniformSource + ?Sized,
        C: Collector + ?Sized,
    {
        let mut stats = SampleStats::default();
        let mut position = init;
        for _ in 0..self.settings.burnin {
            let info = self.step(position, logp, rng, collector)?;
            stats.register_step(&info);
            position = info.accepted;
        }
        debug!(
            "Slice sample from {} to {} in {} steps ({} logp evals, {} shrinks)",
            init, position, stats.steps, stats.logp_evals, stats.shrinks
        );
        Ok((position, stats))
    }

    /// Perform a single slice sampling step starting at `init`.
    ///
    /// The random draws are consumed in this order: the slice level, the
    /// initial offsets of the left and right edge, one per left expansion,
    /// one per right expansion, and one per candidate point.
    pub fn step<F, U, C>(
        &self,
        init: f64,
        logp: &mut F,
        rng: &mut U,
        collector: &mut C,
    ) -> Result<StepInfo>
    where
        F: LogDensity + ?Sized,
        U: UniformSource + ?Sized,
        C: Collector + ?Sized,
    {
        let mut logp = CountingDensity::new(logp);
        let width = self.settings.width;

        let level = logp.logp(init) + rng.next_open_uniform().ln();
        collector.register_level(init, level);

        let mut bracket = Bracket {
            left: init - rng.next_uniform() * width,
            right: init + rng.next_uniform() * width,
        };

        let step_out_left = self.step_out(
            Side::Left,
            &mut bracket.left,
            level,
            &mut logp,
            rng,
            collector,
        )?;
        let step_out_right = self.step_out(
            Side::Right,
            &mut bracket.right,
            level,
            &mut logp,
            rng,
            collector,
        )?;

        let mut shrinks = 0u64;
        loop {
            let candidate = bracket.left + rng.next_uniform() * bracket.width();
            let candidate_logp = logp.logp(candidate);
            if candidate_logp >= level {
                let info = StepInfo {
                    start: init,
                    accepted: candidate,
                    logp: candidate_logp,
                    level,
                    bracket,
                    step_out_left,
                    step_out_right,
                    shrinks,
                    logp_evals: logp.evals,
                };
                trace!("{:?}", info);
                collector.register_accept(&info);
                return Ok(info);
            }

            collector.register_rejection(candidate, &bracket);
            shrinks += 1;
            if let Some(limit) = self.settings.max_shrink {
                if shrinks > limit {
                    warn!(
                        "Rejected {} candidates from {:?} starting at {}",
                        shrinks, bracket, init
                    );
                    return Err(SliceError::ShrinkExceeded { limit });
                }
            }

            // Shrink towards the start of the step, not the bracket center.
            if candidate < init {
                bracket.left = candidate;
            } else {
                bracket.right = candidate;
            }
        }
    }

    /// Expand one edge until its log density is at most `level`.
    ///
    /// Returns the number of expansions.
    fn step_out<L, U, C>(
        &self,
        side: Side,
        edge: &mut f64,
        level: f64,
        logp: &mut L,
        rng: &mut U,
        collector: &mut C,
    ) -> Result<u64>
    where
        L: LogDensity + ?Sized,
        U: UniformSource + ?Sized,
        C: Collector + ?Sized,
    {
        let mut width = self.settings.width;
        let mut count = 0u64;
        while logp.logp(*edge) > level {
            if let Some(limit) = self.settings.max_step_out {
                if count >= limit {
                    warn!(
                        "Stepping out on the {} side reached {} with width {}",
                        side, edge, width
                    );
                    return Err(SliceError::StepOutExceeded { side, limit });
                }
            }
            let step = rng.next_uniform() * width;
            match side {
                Side::Left => *edge -= step,
                Side::Right => *edge += step,
            }
            collector.register_step_out(side, *edge, width);
            width *= STEP_OUT_GROWTH;
            count += 1;
        }
        Ok(count)
    }
}

/// Draw one sample with `burnin` slice sampling steps starting at `init`.
///
/// Fails with [`SliceError::InvalidWidth`] before any work if `width` is not
/// finite and positive.
pub fn sample<F, U>(init: f64, mut logp: F, width: f64, burnin: u64, rng: &mut U) -> Result<f64>
where
    F: LogDensity,
    U: UniformSource + ?Sized,
{
    let settings = SliceSettings {
        width,
        burnin,
        ..Default::default()
    };
    SliceSampler::new(settings)?.sample(init, &mut logp, rng)
}
