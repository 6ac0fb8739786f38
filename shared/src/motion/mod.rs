//! # Motion
//!
//! Timing math for the page's two animation effects:
//!
//! - **Entrance transitions** ([`Reveal`]): one-shot opacity / position changes
//!   applied when the mount flag flips. Rendered as inline CSS transitions.
//! - **Logo wobble** ([`LOGO_WOBBLE`]): an endlessly repeating rotation keyframe
//!   sequence sampled every frame by [`run_keyframe_loop`] until its
//!   [`LoopHandle`] is cancelled.

pub mod driver;
pub mod easing;
pub mod keyframes;
pub mod reveal;

pub use driver::{run_keyframe_loop, FrameClock, LoopHandle};
pub use easing::{CubicBezier, Easing};
pub use keyframes::{Keyframes, Repeat, LOGO_WOBBLE};
pub use reveal::{stagger_delay, Pose, Reveal, Transition, CARD_STAGGER_MS, ENTRANCE_MS};
