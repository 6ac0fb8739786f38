//! Keyframe sequences sampled over time.

use super::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

/// Evenly spaced keyframe values played over `duration_ms`.
///
/// The easing applies to each segment between neighbouring values, so every
/// keyframe is reached with zero velocity under [`Easing::EaseInOut`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub values: &'static [f64],
    pub duration_ms: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

/// Brand icon wobble: rotation in degrees, two seconds per cycle, forever.
pub const LOGO_WOBBLE: Keyframes = Keyframes {
    values: &[0.0, -20.0, 20.0, -20.0, 20.0, 0.0],
    duration_ms: 2000.0,
    easing: Easing::EaseInOut,
    repeat: Repeat::Forever,
};

impl Keyframes {
    /// Whether a non-repeating sequence has played out by `elapsed_ms`.
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        match self.repeat {
            Repeat::Forever => false,
            Repeat::Once => elapsed_ms >= self.duration_ms,
        }
    }

    /// Value at `elapsed_ms` since the sequence started.
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        let (first, last) = match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if self.values.len() == 1 || self.duration_ms <= 0.0 || elapsed_ms <= 0.0 {
            return first;
        }
        if self.is_finished(elapsed_ms) {
            return last;
        }

        let progress = (elapsed_ms % self.duration_ms) / self.duration_ms;
        let segments = (self.values.len() - 1) as f64;
        let position = progress * segments;
        let index = (position.floor() as usize).min(self.values.len() - 2);
        let local = self.easing.apply(position - index as f64);

        let from = self.values[index];
        let to = self.values[index + 1];
        from + (to - from) * local
    }
}
