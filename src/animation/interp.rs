use std::f64::consts::PI;

use rand::Rng;

/// Interpolation law mapping `(step, total_steps)` onto a value between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interp {
    /// Exact proportional interpolation.
    Linear,
    /// Rising half of a sine wave: slow start, fast middle, slow end.
    Breath,
    /// Uniform draw in `[min, max)`; ignores the step entirely.
    Random,
}

impl Interp {
    /// Sample the law at `step` of `total_steps`.
    ///
    /// `total_steps == 0` counts as finished progress. `Random` is not reproducible.
    pub fn sample(self, step: usize, total_steps: usize, from: f64, to: f64) -> f64 {
        match self {
            Self::Linear => from + (to - from) * progress(step, total_steps),
            Self::Breath => {
                let t = progress(step, total_steps);
                let eased = ((t * PI - PI / 2.0).sin() + 1.0) / 2.0;
                from + (to - from) * eased
            }
            Self::Random => {
                let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
                if lo == hi || !lo.is_finite() || !hi.is_finite() {
                    return lo;
                }
                rand::thread_rng().gen_range(lo..hi)
            }
        }
    }
}

fn progress(step: usize, total_steps: usize) -> f64 {
    if total_steps == 0 {
        return 1.0;
    }
    step as f64 / total_steps as f64
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
