use rand::Rng;

/// A source of uniform random numbers in `[0, 1)`.
///
/// Every [`rand::Rng`] is a source. Tests can inject a fixed
/// [`UniformSequence`] instead.
pub trait UniformSource {
    /// Return the next value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Return the next value in `(0, 1)`.
    ///
    /// Exact zeros are skipped, so the logarithm of the result is finite.
    fn next_open_uniform(&mut self) -> f64 {
        loop {
            let u = self.next_uniform();
            if u > 0f64 {
                return u;
            }
        }
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A predetermined sequence of "uniform" values.
///
/// Panics when the sequence is exhausted.
#[derive(Debug, Clone)]
pub struct UniformSequence {
    values: Vec<f64>,
    pos: usize,
}

impl UniformSequence {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        assert!(
            values.iter().all(|&u| (0f64..1f64).contains(&u)),
            "Uniform values must be in [0, 1)"
        );
        UniformSequence { values, pos: 0 }
    }

    /// The number of values consumed so far.
    pub fn draws(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.values.len() - self.pos
    }
}

// Not an `Rng`, so this does not overlap with the blanket impl above.
impl UniformSource for UniformSequence {
    fn next_uniform(&mut self) -> f64 {
        let Some(&u) = self.values.get(self.pos) else {
            panic!("Uniform sequence exhausted after {} draws", self.pos);
        };
        self.pos += 1;
        u
    }
}
