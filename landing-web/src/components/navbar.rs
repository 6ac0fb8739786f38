//! Navigation Bar Component

use leptos::prelude::*;
use shared::content::{Accent, Glyph, BRAND_NAME};
use shared::motion::LOGO_WOBBLE;

use super::auth::AuthControls;
use super::icon::Icon;
use super::theme_toggle::ThemeToggle;
use crate::state::animation::use_keyframes;

#[component]
pub fn Navbar() -> impl IntoView {
    let angle = use_keyframes(LOGO_WOBBLE);
    let logo_class = format!("h-8 w-8 {}", Accent::Red.text_class());

    view! {
        <nav class="fixed w-full bg-background/80 backdrop-blur-sm z-50 border-b">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-2">
                        <div
                            class="brand-logo inline-block"
                            style=move || format!("transform: rotate({}deg);", angle.get())
                        >
                            <Icon glyph=Glyph::Youtube class=logo_class/>
                        </div>
                        <span class="text-xl font-bold">{BRAND_NAME}</span>
                    </div>
                    <div class="flex items-center space-x-4">
                        <AuthControls/>
                        <ThemeToggle/>
                    </div>
                </div>
            </div>
        </nav>
    }
}
