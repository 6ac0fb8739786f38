//! Landing Page - hero, feature grid and demo placeholder

use leptos::prelude::*;
use shared::content::{Glyph, DEMO_PLACEHOLDER, HERO_HEADING, HERO_TAGLINE};
use shared::motion::Reveal;
use shared::nav::ADD_TO_CHROME;

use crate::components::{Entrance, FeatureGrid, Icon, Navbar};
use crate::services::BrowserNavigator;
use crate::state::mount::use_mount_visibility;

#[component]
pub fn LandingPage() -> impl IntoView {
    let visible = use_mount_visibility();
    let navigator = BrowserNavigator;

    // Fire and forget: a blocked popup is only logged
    let on_cta = move |_| {
        if let Err(e) = ADD_TO_CHROME.activate(&navigator) {
            log::warn!("could not open {}: {}", ADD_TO_CHROME.target.url, e);
        }
    };

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <Navbar/>

            <main class="pt-24 pb-16">
                <Entrance
                    reveal=Reveal::hero()
                    visible=visible
                    class="text-center mt-24 max-w-4xl mx-auto px-4 sm:px-6 lg:px-8"
                >
                    <h1 class="text-4xl sm:text-6xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-pink-500 via-red-500 to-yellow-500">
                        {HERO_HEADING}
                    </h1>
                    <p class="mt-6 text-xl text-muted-foreground">{HERO_TAGLINE}</p>
                    <Entrance reveal=Reveal::call_to_action() visible=visible class="mt-8">
                        <button
                            type="button"
                            id="cta-add-to-chrome"
                            class="inline-flex items-center rounded-md font-medium bg-gradient-to-r from-blue-500 to-blue-700 hover:from-blue-600 hover:to-blue-800 text-white px-8 py-6 text-lg"
                            on:click=on_cta
                        >
                            <Icon glyph=Glyph::Chrome class="mr-2 h-5 w-5"/>
                            {ADD_TO_CHROME.label}
                        </button>
                    </Entrance>
                </Entrance>

                <Entrance
                    reveal=Reveal::feature_grid()
                    visible=visible
                    class="mt-16 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8"
                >
                    <FeatureGrid visible=visible/>
                </Entrance>

                <Entrance
                    reveal=Reveal::demo()
                    visible=visible
                    class="mt-24 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8"
                >
                    <div class="aspect-video rounded-lg border bg-card">
                        <div class="flex items-center justify-center h-full text-muted-foreground">
                            {DEMO_PLACEHOLDER}
                        </div>
                    </div>
                </Entrance>
            </main>
        </div>
    }
}
