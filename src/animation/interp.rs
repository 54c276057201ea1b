use crate::foundation::error::{ScrollsyncError, ScrollsyncResult};

/// Piecewise-linear multi-point remap over a normalized input.
///
/// `input` stops must be strictly increasing; `output` pairs with them
/// position-wise. Sampling clamps to the first/last output beyond the ends.
/// This is the workhorse behind decorative scroll-linked values
/// (`[0, 0.5, 1] -> [0.8, 1.0, 1.1]` and friends).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interp {
    /// Input stops, strictly increasing.
    pub input: Vec<f64>,
    /// Output values, one per input stop.
    pub output: Vec<f64>,
}

impl Interp {
    /// Create a validated remap curve.
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> ScrollsyncResult<Self> {
        let interp = Self { input, output };
        interp.validate()?;
        Ok(interp)
    }

    /// Validate stop count, pairing, finiteness, and monotonicity.
    pub fn validate(&self) -> ScrollsyncResult<()> {
        if self.input.len() < 2 {
            return Err(ScrollsyncError::animation(
                "Interp needs at least two input stops",
            ));
        }
        if self.input.len() != self.output.len() {
            return Err(ScrollsyncError::animation(
                "Interp input and output lengths must match",
            ));
        }
        if self
            .input
            .iter()
            .chain(self.output.iter())
            .any(|v| !v.is_finite())
        {
            return Err(ScrollsyncError::animation("Interp stops must be finite"));
        }
        if !self.input.windows(2).all(|w| w[0] < w[1]) {
            return Err(ScrollsyncError::animation(
                "Interp input stops must be strictly increasing",
            ));
        }
        Ok(())
    }

    /// Sample the curve at `t`, clamping outside the stop range.
    pub fn sample(&self, t: f64) -> f64 {
        let n = self.input.len();
        if t <= self.input[0] {
            return self.output[0];
        }
        if t >= self.input[n - 1] {
            return self.output[n - 1];
        }

        let idx = self.input.partition_point(|&x| x <= t);
        let (x0, x1) = (self.input[idx - 1], self.input[idx]);
        let (y0, y1) = (self.output[idx - 1], self.output[idx]);
        let local = (t - x0) / (x1 - x0);
        y0 + (y1 - y0) * local
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
