//! # Shared Landing Page Model
//!
//! Everything about the ChatWithYoutube landing page that does not need a browser:
//! the static copy, the motion math, the mount state machine and the session
//! slot selection. The `landing-web` crate renders these with Leptos; keeping
//! them here lets them be tested natively.
//!
//! ## Structure
//!
//! - **[`content`]**: glyphs, accents, the six feature descriptors and page copy
//! - **[`motion`]**: easing curves, entrance transitions, keyframes and the
//!   cancellable keyframe loop that drives the logo wobble
//! - **[`mount`]**: the one-shot [`MountState`](mount::MountState)
//! - **[`session`]**: signed-in / signed-out state reported by the identity provider
//! - **[`nav`]**: the call-to-action and the external navigator seam
//! - **[`theme`]**: light / dark preference
//!
//! ## Usage
//!
//! ```rust
//! use shared::content::FEATURES;
//! use shared::motion::Reveal;
//!
//! for (index, feature) in FEATURES.iter().enumerate() {
//!     let reveal = Reveal::card(index);
//!     println!("{} fades in after {}ms", feature.title, reveal.transition.delay_ms);
//! }
//! ```

pub mod content;
pub mod motion;
pub mod mount;
pub mod nav;
pub mod session;
pub mod theme;

pub use content::{Accent, FeatureDescriptor, Glyph, FEATURES};
pub use mount::MountState;
pub use nav::{CallToAction, ExternalNavigator, NavTarget, NavigationError};
pub use session::{AuthControl, AuthSlot, SessionState, SignInMode, UserSummary};
pub use theme::Theme;
