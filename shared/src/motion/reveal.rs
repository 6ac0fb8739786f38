//! Entrance transitions driven by the mount flag.

use super::easing::Easing;

/// Duration of every entrance transition.
pub const ENTRANCE_MS: u32 = 500;

/// Extra delay per feature card, so earlier cards appear first.
pub const CARD_STAGGER_MS: u32 = 100;

/// Entrance delay of the card at `index` in the feature grid.
pub fn stagger_delay(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(CARD_STAGGER_MS)
}

/// Timing of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// CSS `transition` shorthand covering each of `properties`.
    pub fn css(&self, properties: &[&str]) -> String {
        let timing = self.easing.css();
        properties
            .iter()
            .map(|property| {
                format!(
                    "{} {}ms {} {}ms",
                    property, self.duration_ms, timing, self.delay_ms
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Visual pose of an element: opacity, vertical offset and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully visible, in place, natural size.
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.offset_y, self.scale
        )
    }
}

/// An entrance transition: the pose before mount and how to get to [`Pose::SETTLED`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub initial: Pose,
    pub transition: Transition,
}

const RISE: Pose = Pose {
    opacity: 0.0,
    offset_y: 20.0,
    scale: 1.0,
};

const GROW: Pose = Pose {
    opacity: 0.0,
    offset_y: 0.0,
    scale: 0.95,
};

impl Reveal {
    /// Hero heading, paragraph and call-to-action block.
    pub const fn hero() -> Self {
        Self {
            initial: RISE,
            transition: Transition::new(ENTRANCE_MS),
        }
    }

    /// The call-to-action button inside the hero.
    pub const fn call_to_action() -> Self {
        Self {
            initial: GROW,
            transition: Transition::new(ENTRANCE_MS).with_delay(300),
        }
    }

    /// Wrapper around the whole feature grid.
    pub const fn feature_grid() -> Self {
        Self {
            initial: RISE,
            transition: Transition::new(ENTRANCE_MS).with_delay(200),
        }
    }

    /// Card `index` of the feature grid.
    pub fn card(index: usize) -> Self {
        Self {
            initial: RISE,
            transition: Transition::new(ENTRANCE_MS).with_delay(stagger_delay(index)),
        }
    }

    /// Demo placeholder below the grid.
    pub const fn demo() -> Self {
        Self {
            initial: RISE,
            transition: Transition::new(ENTRANCE_MS).with_delay(400),
        }
    }

    pub fn pose(&self, visible: bool) -> Pose {
        if visible {
            Pose::SETTLED
        } else {
            self.initial
        }
    }

    /// Inline style for the element given the mount flag.
    pub fn style(&self, visible: bool) -> String {
        format!(
            "{} transition: {};",
            self.pose(visible).css(),
            self.transition.css(&["opacity", "transform"])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FEATURES;

    #[test]
    fn test_card_delays_are_non_decreasing() {
        let delays: Vec<u32> = (0..FEATURES.len())
            .map(|i| Reveal::card(i).transition.delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500]);
        for pair in delays.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_stagger_saturates() {
        assert_eq!(stagger_delay(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_pose_follows_mount_flag() {
        let reveal = Reveal::hero();
        assert_eq!(reveal.pose(false).opacity, 0.0);
        assert_eq!(reveal.pose(false).offset_y, 20.0);
        assert_eq!(reveal.pose(true), Pose::SETTLED);
    }

    #[test]
    fn test_call_to_action_grows_in() {
        let reveal = Reveal::call_to_action();
        assert_eq!(reveal.initial.scale, 0.95);
        assert_eq!(reveal.initial.offset_y, 0.0);
        assert_eq!(reveal.transition.delay_ms, 300);
    }

    #[test]
    fn test_section_delays() {
        assert_eq!(Reveal::hero().transition.delay_ms, 0);
        assert_eq!(Reveal::feature_grid().transition.delay_ms, 200);
        assert_eq!(Reveal::demo().transition.delay_ms, 400);
    }

    #[test]
    fn test_style_string() {
        let style = Reveal::card(2).style(false);
        assert_eq!(
            style,
            "opacity: 0; transform: translateY(20px) scale(1); \
             transition: opacity 500ms cubic-bezier(0, 0, 0.58, 1) 200ms, \
             transform 500ms cubic-bezier(0, 0, 0.58, 1) 200ms;"
        );
    }
}
