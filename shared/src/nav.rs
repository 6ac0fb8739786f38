//! # External Navigation
//!
//! The hero's call-to-action opens the extension storefront in a new browsing
//! context. Opening is abstracted behind [`ExternalNavigator`] so the browser
//! implementation lives in the web crate and the dispatch can be tested here.

use thiserror::Error;

use crate::content::{CTA_LABEL, STORE_URL};

/// Window name that asks the browser for a fresh browsing context.
pub const NEW_CONTEXT: &str = "_blank";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no browser window available")]
    NoWindow,

    #[error("browser refused to open {0} (popup blocked?)")]
    Blocked(String),

    #[error("opening {url} failed: {reason}")]
    Failed { url: String, reason: String },
}

/// A fixed URL plus the browsing context it opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    pub url: &'static str,
    pub context: &'static str,
}

impl NavTarget {
    pub const fn new_context(url: &'static str) -> Self {
        Self {
            url,
            context: NEW_CONTEXT,
        }
    }
}

/// Something that can open a URL outside the current page.
pub trait ExternalNavigator {
    fn open(&self, target: &NavTarget) -> Result<(), NavigationError>;
}

/// The hero's single call-to-action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: NavTarget,
}

/// "Add to Chrome", opening the storefront in a new tab.
pub const ADD_TO_CHROME: CallToAction = CallToAction {
    label: CTA_LABEL,
    target: NavTarget::new_context(STORE_URL),
};

impl CallToAction {
    /// Open the target once. Failures are returned for the caller to log;
    /// nothing is retried.
    pub fn activate<N: ExternalNavigator + ?Sized>(&self, navigator: &N) -> Result<(), NavigationError> {
        log::info!("call-to-action '{}' -> {}", self.label, self.target.url);
        navigator.open(&self.target)
    }
}
