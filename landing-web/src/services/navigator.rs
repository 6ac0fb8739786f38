//! Opens external URLs through `window.open`.

use shared::nav::{ExternalNavigator, NavTarget, NavigationError};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl ExternalNavigator for BrowserNavigator {
    fn open(&self, target: &NavTarget) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;

        match window.open_with_url_and_target(target.url, target.context) {
            Ok(Some(_)) => Ok(()),
            // null return: the browser suppressed the new context
            Ok(None) => Err(NavigationError::Blocked(target.url.to_string())),
            Err(e) => Err(NavigationError::Failed {
                url: target.url.to_string(),
                reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
            }),
        }
    }
}
