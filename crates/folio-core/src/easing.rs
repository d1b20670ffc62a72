//! Easing curves and time-sampled tweens.
//!
//! All curves map normalised time in \[0, 1\] to normalised progress. Inputs
//! outside that range are clamped so a late tick never overshoots the end
//! value.

use crate::error::{FolioError, Result};

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 1e-6;
const DERIVATIVE_EPSILON: f32 = 1e-6;
const BISECTION_ITERATIONS: usize = 32;

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// CSS-style cubic bezier with fixed end points (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    pub const EASE: CubicBezier = CubicBezier { x1: 0.25, y1: 0.1, x2: 0.25, y2: 1.0 };
    pub const EASE_IN: CubicBezier = CubicBezier { x1: 0.42, y1: 0.0, x2: 1.0, y2: 1.0 };
    pub const EASE_OUT: CubicBezier = CubicBezier { x1: 0.0, y1: 0.0, x2: 0.58, y2: 1.0 };
    pub const EASE_IN_OUT: CubicBezier = CubicBezier { x1: 0.42, y1: 0.0, x2: 0.58, y2: 1.0 };

    /// Builds a curve from its two inner control points.
    ///
    /// The x components must lie in \[0, 1\] so the curve is a function of
    /// time; the y components may overshoot (back/elastic style curves).
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Result<Self> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(FolioError::NonFiniteControlPoint);
        }
        for (index, value) in [(1u8, x1), (2u8, x2)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FolioError::ControlPointOutOfRange { index, value });
            }
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    pub fn control_points(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    // Polynomial coefficients (a, b, c) of B(t) = ((a t + b) t + c) t.
    #[inline]
    fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    #[inline]
    fn sample_x(&self, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn sample_y(&self, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(self.y1, self.y2);
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn sample_dx(&self, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Finds the curve parameter whose x equals `x`.
    fn parameter_for_x(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < NEWTON_EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < DERIVATIVE_EPSILON {
                break;
            }
            t -= err / d;
        }

        // Flat derivative or slow convergence: bisect, x(t) is monotone on [0, 1].
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let v = self.sample_x(t);
            if (v - x).abs() < NEWTON_EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }

    /// Maps normalised time to progress. `solve(0) == 0` and `solve(1) == 1`.
    pub fn solve(&self, x: f32) -> f32 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        // Rounding can push y just past the control hull; keep it inside.
        let lo = self.y1.min(self.y2).min(0.0);
        let hi = self.y1.max(self.y2).max(1.0);
        self.sample_y(self.parameter_for_x(x)).clamp(lo, hi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    OutCubic,
    InOutQuad,
    InOutCubic,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::OutCubic => ease_out_cubic(t),
            Easing::InOutQuad => ease_in_out_quad(t),
            Easing::InOutCubic => ease_in_out_cubic(t),
            Easing::Bezier(curve) => curve.solve(t),
        }
    }
}

/// Scalar interpolation from `from` to `to`, sampled against wall time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Linear progress in \[0, 1\].
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, now_ms: f64) -> f32 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(p)
    }

    #[inline]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    #[inline]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms.max(0.0)
    }
}
