use std::fmt;

/// Piecewise-linear mapping from a [0,1] progress value to an output value.
///
/// Breakpoint inputs must be strictly increasing and stay inside [0,1];
/// outputs are unconstrained so a curve can be authored with deliberate
/// overshoot (e.g. a spring-like scale pop above 1.0).
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    points: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CurveError {
    TooFewPoints(usize),
    InputOutOfRange(f64),
    NonIncreasingInput { left: f64, right: f64 },
    NonFinite,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::TooFewPoints(n) => {
                write!(f, "curve needs at least 2 breakpoints, got {}", n)
            }
            CurveError::InputOutOfRange(x) => {
                write!(f, "curve breakpoint input {} is outside [0, 1]", x)
            }
            CurveError::NonIncreasingInput { left, right } => {
                write!(
                    f,
                    "curve breakpoint inputs must be strictly increasing ({} then {})",
                    left, right
                )
            }
            CurveError::NonFinite => write!(f, "curve breakpoints must be finite numbers"),
        }
    }
}

impl std::error::Error for CurveError {}

impl Curve {
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints(points.len()));
        }
        for &(input, output) in &points {
            if !input.is_finite() || !output.is_finite() {
                return Err(CurveError::NonFinite);
            }
            if !(0.0..=1.0).contains(&input) {
                return Err(CurveError::InputOutOfRange(input));
            }
        }
        for pair in points.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(CurveError::NonIncreasingInput {
                    left: pair[0].0,
                    right: pair[1].0,
                });
            }
        }
        Ok(Self { points })
    }

    /// Two-point convenience for plain fades and slides.
    pub fn linear(from: f64, to: f64) -> Self {
        Self {
            points: vec![(0.0, from), (1.0, to)],
        }
    }

    /// Hold `value` across the whole range.
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![(0.0, value), (1.0, value)],
        }
    }

    /// Evaluate at `progress`, clamped to the breakpoint domain so callers
    /// never see extrapolation, even during layout thrash.
    pub fn evaluate(&self, progress: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        let p = if progress.is_nan() {
            first.0
        } else {
            progress.clamp(first.0, last.0)
        };

        // N is tiny (typically <= 6), a linear scan beats anything fancier.
        for pair in self.points.windows(2) {
            let (i0, o0) = pair[0];
            let (i1, o1) = pair[1];
            if p <= i1 {
                if i1 == i0 {
                    return o0;
                }
                return o0 + (o1 - o0) * (p - i0) / (i1 - i0);
            }
        }
        last.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_curve_matches_expected_samples() {
        let curve = Curve::new(vec![(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]).unwrap();
        assert_eq!(curve.evaluate(0.0), 0.0);
        assert_eq!(curve.evaluate(0.25), 0.5);
        assert_eq!(curve.evaluate(0.75), 0.5);
        assert_eq!(curve.evaluate(1.0), 0.0);
    }

    #[test]
    fn linear_and_constant_helpers() {
        let fade = Curve::linear(0.0, 1.0);
        assert_eq!(fade.evaluate(0.5), 0.5);
        let hold = Curve::constant(0.4);
        assert_eq!(hold.evaluate(0.0), 0.4);
        assert_eq!(hold.evaluate(1.0), 0.4);
    }

    #[test]
    fn out_of_domain_progress_clamps_to_endpoints() {
        let curve = Curve::new(vec![(0.0, 0.2), (1.0, 0.9)]).unwrap();
        assert_eq!(curve.evaluate(-1.0), curve.evaluate(0.0));
        assert_eq!(curve.evaluate(2.0), curve.evaluate(1.0));
        assert_eq!(curve.evaluate(f64::NAN), curve.evaluate(0.0));
    }

    #[test]
    fn output_stays_within_breakpoint_range() {
        let curve = Curve::new(vec![(0.0, 0.0), (0.3, 0.8), (0.7, 0.4), (1.0, 1.0)]).unwrap();
        let mut p = 0.0;
        while p <= 1.0 {
            let v = curve.evaluate(p);
            assert!((0.0..=1.0).contains(&v), "p={} gave {}", p, v);
            p += 0.01;
        }
    }

    #[test]
    fn monotone_outputs_evaluate_monotonically() {
        let curve = Curve::new(vec![(0.0, 0.0), (0.4, 0.3), (1.0, 1.0)]).unwrap();
        let mut prev = curve.evaluate(0.0);
        let mut p = 0.01;
        while p <= 1.0 {
            let v = curve.evaluate(p);
            assert!(v >= prev, "non-monotone at p={}", p);
            prev = v;
            p += 0.01;
        }
    }

    #[test]
    fn overshoot_curves_are_allowed_by_construction() {
        let curve = Curve::new(vec![(0.0, 0.0), (0.8, 1.15), (1.0, 1.0)]).unwrap();
        assert!(curve.evaluate(0.8) > 1.0);
    }

    #[test]
    fn rejects_malformed_definitions() {
        assert_eq!(
            Curve::new(vec![(0.0, 1.0)]),
            Err(CurveError::TooFewPoints(1))
        );
        assert!(matches!(
            Curve::new(vec![(0.0, 0.0), (0.5, 1.0), (0.5, 0.0)]),
            Err(CurveError::NonIncreasingInput { .. })
        ));
        assert!(matches!(
            Curve::new(vec![(-0.1, 0.0), (1.0, 1.0)]),
            Err(CurveError::InputOutOfRange(_))
        ));
        assert!(matches!(
            Curve::new(vec![(0.0, f64::NAN), (1.0, 1.0)]),
            Err(CurveError::NonFinite)
        ));
    }
}
