//! Sample from unnormalized univariate densities using slice sampling.
//!
//! The sampler follows the stepping out and shrinkage procedures of Neal
//! (2003), with a step-out width that grows by a factor of 1.5 after every
//! expansion. The log density is any [`LogDensity`] (closures included), and
//! the random numbers come from an injected [`UniformSource`].
//!
//! ```
//! use rand::SeedableRng;
//! use slice_rs::{sample, SliceError};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let logp = |x: f64| -0.5 * (x - 10.) * (x - 10.);
//! let draw = sample(0., logp, 5., 100, &mut rng)?;
//! assert!(draw.is_finite());
//! # Ok::<(), SliceError>(())
//! ```

pub(crate) mod chain;
pub(crate) mod density;
pub(crate) mod sampler;
pub(crate) mod settings;
pub(crate) mod stats;
pub(crate) mod uniform;

pub use chain::{chain_rng, sample_sequentially, Progress};
pub use density::{LogDensity, NormalLogp};
pub use sampler::{sample, Result, SliceError, SliceSampler};
pub use settings::{SliceSettings, STEP_OUT_GROWTH};
pub use stats::{Bracket, Collector, SampleStats, Side, StepInfo};
pub use uniform::{UniformSequence, UniformSource};
