//! Easing curves.

/// A CSS-style cubic Bézier timing function with fixed end points (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn slope(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Curve parameter `t` whose x coordinate is `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = Self::slope(self.x1, self.x2, t);
            if slope.abs() < EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Newton stalled on a flat stretch; x(t) is monotonic on [0, 1] so bisect.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    pub fn solve(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }

    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Named timing functions used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn curve(&self) -> Option<CubicBezier> {
        match self {
            Easing::Linear => None,
            Easing::EaseOut => Some(CubicBezier::new(0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some(CubicBezier::new(0.42, 0.0, 0.58, 1.0)),
        }
    }

    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(&self, progress: f64) -> f64 {
        match self.curve() {
            Some(curve) => curve.solve(progress),
            None => progress.clamp(0.0, 1.0),
        }
    }

    /// CSS `transition-timing-function` value.
    pub fn css(&self) -> String {
        match self.curve() {
            Some(curve) => curve.css(),
            None => "linear".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_points_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let eased = Easing::EaseInOut.apply(0.5);
        assert!((eased - 0.5).abs() < 1e-4, "got {eased}");

        let early = Easing::EaseInOut.apply(0.25);
        let late = Easing::EaseInOut.apply(0.75);
        assert!((early + late - 1.0).abs() < 1e-4);
        assert!(early < 0.25, "ease-in-out starts slow");
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let eased = Easing::EaseInOut.apply(step as f64 / 100.0);
            assert!(eased >= previous - 1e-9);
            previous = eased;
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(Easing::EaseOut.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_css_values() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(Easing::EaseInOut.css(), "cubic-bezier(0.42, 0, 0.58, 1)");
    }
}
