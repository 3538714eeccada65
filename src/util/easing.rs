//! Easing functions for animation interpolation.
//!
//! Provides the closed set of easing curves a part may select for its
//! animation window. All curves are cheap enough to evaluate once per
//! part per frame without caching.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    /// Zero slope at both endpoints, so parts never visibly "pop" when
    /// their window opens or closes.
    CubicInOut,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing function: symmetric cubic ease-in-out, the curve
    /// every generated part uses for its staged reveal.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let omt = -2.0 * t + 2.0;
                    1.0 - omt * omt * omt / 2.0
                }
            }
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicHermite { c1, c2 } => {
                // f(t) = c0(1-t)³ + c1·3t(1-t)² + c2·3(1-t)t² + c3·t³
                // where c0=0.0, c3=1.0
                // Simplified: c1·3t(1-t)² + c2·3(1-t)t² + t³
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_in_out_endpoints() {
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(0.5), 0.5);
        assert!((ease.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_in_out_symmetry() {
        // f(x) + f(1-x) == 1 for the symmetric ease-in-out curve
        let ease = EasingFunction::CubicInOut;
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            let sum = ease.evaluate(x) + ease.evaluate(1.0 - x);
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "symmetry broken at x={x}: f(x)+f(1-x)={sum}"
            );
        }
    }

    #[test]
    fn test_cubic_in_out_monotonic() {
        let ease = EasingFunction::CubicInOut;
        let mut prev = ease.evaluate(0.0);
        for i in 1..=100 {
            let v = ease.evaluate(i as f32 / 100.0);
            assert!(v >= prev, "not monotonic at step {i}: {v} < {prev}");
            prev = v;
        }
    }

    #[test]
    fn test_cubic_in_out_known_value() {
        // 4·0.4³ = 0.256 on the lower half of the curve
        let ease = EasingFunction::CubicInOut;
        assert!((ease.evaluate(0.4) - 0.256).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;

        // Negative input clamps to 0
        assert_eq!(linear.evaluate(-0.5), 0.0);

        // Input > 1 clamps to 1
        assert_eq!(linear.evaluate(1.5), 1.0);

        // Also holds for the default curve
        let ease = EasingFunction::CubicInOut;
        assert_eq!(ease.evaluate(-0.5), 0.0);
        assert!((ease.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_in() {
        let quad_in = EasingFunction::QuadraticIn;
        assert_eq!(quad_in.evaluate(0.0), 0.0);
        assert_eq!(quad_in.evaluate(0.5), 0.25); // 0.5² = 0.25
        assert_eq!(quad_in.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_sqrt_out() {
        let sqrt_out = EasingFunction::SqrtOut;
        assert_eq!(sqrt_out.evaluate(0.0), 0.0);
        assert!((sqrt_out.evaluate(0.25) - 0.5).abs() < 1e-6); // sqrt(0.25) = 0.5
        assert_eq!(sqrt_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_cubic_in_out() {
        let default_easing = EasingFunction::default();
        assert_eq!(default_easing, EasingFunction::DEFAULT);
        assert_eq!(default_easing, EasingFunction::CubicInOut);
    }
}
