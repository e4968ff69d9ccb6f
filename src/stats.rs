/// One end of the slice bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The interval a slice sampling step draws candidates from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub left: f64,
    pub right: f64,
}

impl Bracket {
    /// Whether `x` lies in the closed interval `[left, right]`.
    pub fn contains(&self, x: f64) -> bool {
        (self.left <= x) & (x <= self.right)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Information about a single slice sampling step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    /// The position the step started from.
    pub start: f64,
    /// The accepted point.
    pub accepted: f64,
    /// The log density of the accepted point.
    pub logp: f64,
    /// The slice level. `logp >= level` always holds.
    pub level: f64,
    /// The bracket at the moment of acceptance.
    pub bracket: Bracket,
    pub step_out_left: u64,
    pub step_out_right: u64,
    /// The number of rejected candidates.
    pub shrinks: u64,
    /// The number of log density evaluations during this step.
    pub logp_evals: u64,
}

/// Accumulated statistics over all steps of one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleStats {
    pub steps: u64,
    pub logp_evals: u64,
    pub step_out_left: u64,
    pub step_out_right: u64,
    pub shrinks: u64,
    /// The final step, if any step was taken.
    pub last: Option<StepInfo>,
}

impl SampleStats {
    pub(crate) fn register_step(&mut self, info: &StepInfo) {
        self.steps += 1;
        self.logp_evals += info.logp_evals;
        self.step_out_left += info.step_out_left;
        self.step_out_right += info.step_out_right;
        self.shrinks += info.shrinks;
        self.last = Some(*info);
    }
}

/// Callbacks for the events of a slice sampling step.
///
/// All methods default to doing nothing. Collectors can be used to compute
/// statistics or to check the sampler from tests.
pub trait Collector {
    /// The slice level for a step starting at `start` was chosen.
    fn register_level(&mut self, _start: f64, _level: f64) {}

    /// One side of the bracket was expanded to `edge`, using `width` as the
    /// maximal step length.
    fn register_step_out(&mut self, _side: Side, _edge: f64, _width: f64) {}

    /// `candidate` was drawn from `bracket` and rejected.
    fn register_rejection(&mut self, _candidate: f64, _bracket: &Bracket) {}

    /// A step finished.
    fn register_accept(&mut self, _info: &StepInfo) {}
}

impl Collector for () {}

impl<C: Collector + ?Sized> Collector for &mut C {
    fn register_level(&mut self, start: f64, level: f64) {
        (**self).register_level(start, level)
    }

    fn register_step_out(&mut self, side: Side, edge: f64, width: f64) {
        (**self).register_step_out(side, edge, width)
    }

    fn register_rejection(&mut self, candidate: f64, bracket: &Bracket) {
        (**self).register_rejection(candidate, bracket)
    }

    fn register_accept(&mut self, info: &StepInfo) {
        (**self).register_accept(info)
    }
}
