//! UI Components

pub mod auth;
pub mod entrance;
pub mod feature_card;
pub mod icon;
pub mod navbar;
pub mod theme_toggle;

pub use auth::{AuthControls, SignInButton, SignUpButton, UserMenu};
pub use entrance::Entrance;
pub use feature_card::{FeatureCard, FeatureGrid};
pub use icon::Icon;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
