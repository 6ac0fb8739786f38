//! Reactive state: app-wide contexts and per-view hooks.

pub mod animation;
pub mod mount;
pub mod session;
pub mod theme;
