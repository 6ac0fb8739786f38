//! Application constants
//!
//! Page copy, the store URL and the sign-out redirect live in the `shared`
//! crate next to the types that use them.

// Logging
#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Shell
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

// Identity provider script
pub const IDENTITY_POLL_ATTEMPTS: u32 = 50;
pub const IDENTITY_POLL_INTERVAL_MS: u32 = 100;

// Theme
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Animation
pub const FRAME_INTERVAL_MS: u32 = 16; // ~60fps
