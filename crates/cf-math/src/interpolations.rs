//! 1-D interpolation trait and implementations.

use cf_core::{errors::Result, Real};

/// A 1-D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    ///
    /// Outside `[x_min, x_max]` the boundary segment is extended linearly;
    /// whether that extension is meaningful is the caller's decision.
    fn value(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from strictly increasing `xs` and
    /// corresponding `ys`.
    ///
    /// # Errors
    /// Returns a validation error if the slices have different lengths, fewer
    /// than 2 points, or non-increasing `xs`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        cf_core::validate!(xs.len() >= 2, "need at least 2 points for interpolation");
        cf_core::validate!(xs.len() == ys.len(), "xs and ys must have the same length");
        cf_core::validate!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "xs must be strictly increasing"
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Binary search for the segment index `i` such that
    /// `xs[i] <= x < xs[i+1]`, clamped to the boundary segments.
    fn locate(&self, x: Real) -> usize {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().expect("at least 2 points by construction")
    }

    fn value(&self, x: Real) -> Real {
        let i = self.locate(x);
        let dx = self.xs[i + 1] - self.xs[i];
        let w = (x - self.xs[i]) / dx;
        self.ys[i] * (1.0 - w) + self.ys[i + 1] * w
    }
}
