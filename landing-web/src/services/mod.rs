//! Browser-side services: identity provider interop, navigation and frame timing.

pub mod clock;
pub mod identity;
pub mod navigator;

pub use clock::BrowserClock;
pub use identity::IdentityError;
pub use navigator::BrowserNavigator;
