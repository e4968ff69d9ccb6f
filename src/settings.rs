use crate::sampler::{Result, SliceError};

/// Factor by which the step-out width grows after every expansion.
pub const STEP_OUT_GROWTH: f64 = 1.5;

/// Settings for the slice sampler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceSettings {
    /// The initial width used to place and step out the bracket. Must be
    /// finite and positive.
    pub width: f64,
    /// The number of slice sampling steps performed per sample.
    pub burnin: u64,
    /// Fail with `StepOutExceeded` if one side of the bracket needs more
    /// than this many expansions in a single step. `None` never fails.
    pub max_step_out: Option<u64>,
    /// Fail with `ShrinkExceeded` if more than this many candidates are
    /// rejected in a single step. `None` never fails.
    pub max_shrink: Option<u64>,
}

impl Default for SliceSettings {
    fn default() -> Self {
        Self {
            width: 1f64,
            burnin: 100,
            max_step_out: None,
            max_shrink: None,
        }
    }
}

impl SliceSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0f64) {
            return Err(SliceError::InvalidWidth(self.width));
        }
        Ok(())
    }
}
