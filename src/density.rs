/// An unnormalized univariate log density.
///
/// Only comparisons between values matter to the sampler, so any additive
/// constant can be dropped. Implementations must be deterministic for a
/// fixed input, but may capture external parameters.
///
/// Every `FnMut(f64) -> f64` is a `LogDensity`.
pub trait LogDensity {
    fn logp(&mut self, x: f64) -> f64;
}

impl<F> LogDensity for F
where
    F: FnMut(f64) -> f64,
{
    fn logp(&mut self, x: f64) -> f64 {
        self(x)
    }
}

/// Wraps a log density and counts how often it is evaluated.
pub(crate) struct CountingDensity<'a, F: LogDensity + ?Sized> {
    inner: &'a mut F,
    pub(crate) evals: u64,
}

impl<'a, F: LogDensity + ?Sized> CountingDensity<'a, F> {
    pub(crate) fn new(inner: &'a mut F) -> Self {
        CountingDensity { inner, evals: 0 }
    }
}

impl<F: LogDensity + ?Sized> LogDensity for CountingDensity<'_, F> {
    fn logp(&mut self, x: f64) -> f64 {
        self.evals += 1;
        self.inner.logp(x)
    }
}

/// Unnormalized normal log density, mostly useful for tests and benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct NormalLogp {
    pub mu: f64,
    pub sigma: f64,
}

impl NormalLogp {
    pub fn new(mu: f64, sigma: f64) -> Self {
        NormalLogp { mu, sigma }
    }
}

impl LogDensity for NormalLogp {
    fn logp(&mut self, x: f64) -> f64 {
        let diff = (x - self.mu) / self.sigma;
        -0.5 * diff * diff
    }
}
