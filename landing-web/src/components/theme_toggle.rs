//! Light / dark toggle button.

use leptos::prelude::*;
use shared::content::Glyph;

use super::icon::Icon;
use crate::state::theme::use_theme_context;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            type="button"
            class="inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-accent hover:text-accent-foreground"
            aria-label="Toggle theme"
            on:click=move |_| theme.toggle()
        >
            {move || {
                // Show the theme a click switches to
                let glyph = if theme.current().is_dark() { Glyph::Sun } else { Glyph::Moon };
                view! { <Icon glyph=glyph class="h-5 w-5"/> }
            }}
        </button>
    }
}
