//! Theme preference context

use leptos::prelude::*;
use shared::theme::Theme;

use crate::utils::constants::{DARK_CLASS, DARK_SCHEME_QUERY, THEME_STORAGE_KEY};
use crate::utils::dom::{media_matches, read_local, set_root_class, write_local};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn current(&self) -> Theme {
        self.theme.get()
    }

    /// Switch theme and remember the visitor's choice.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        write_local(THEME_STORAGE_KEY, next.as_str());
    }
}

/// Provide the theme context, restoring the stored or system preference and
/// keeping the root `dark` class in sync.
///
/// Only an explicit toggle is persisted, so a visitor who never picks a theme
/// keeps following the system preference.
pub fn provide_theme_context() -> ThemeContext {
    let stored = read_local(THEME_STORAGE_KEY);
    let initial = Theme::resolve(stored.as_deref(), media_matches(DARK_SCHEME_QUERY));
    log::debug!("initial theme: {}", initial);

    let context = ThemeContext::new(initial);
    provide_context(context);

    Effect::new(move || {
        let theme = context.theme.get();
        set_root_class(DARK_CLASS, theme.is_dark());
    });

    context
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
