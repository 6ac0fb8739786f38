//! Feature grid and its cards.

use leptos::prelude::*;
use shared::content::{FeatureDescriptor, FEATURES};
use shared::motion::Reveal;

use super::entrance::Entrance;
use super::icon::Icon;

#[component]
pub fn FeatureCard(
    feature: FeatureDescriptor,
    index: usize,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    let icon_class = format!("h-8 w-8 {}", feature.accent.text_class());

    view! {
        <Entrance reveal=Reveal::card(index) visible=visible class="relative group">
            // Halo brightens on hover
            <div class="absolute -inset-0.5 bg-gradient-to-r from-pink-500 to-purple-500 rounded-lg blur opacity-25 group-hover:opacity-75 transition duration-1000 group-hover:duration-200"></div>
            <div class="feature-card relative p-6 bg-card rounded-lg border h-full flex flex-col">
                <div class="flex items-center justify-center w-12 h-12 rounded-full bg-primary/10">
                    <Icon glyph=feature.glyph class=icon_class/>
                </div>
                <h3 class="mt-4 text-xl font-semibold">{feature.title}</h3>
                <p class="mt-2 text-muted-foreground flex-grow">{feature.description}</p>
            </div>
        </Entrance>
    }
}

/// All feature cards in declaration order, revealed with a per-card stagger.
#[component]
pub fn FeatureGrid(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {FEATURES
                .iter()
                .enumerate()
                .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index visible=visible/> })
                .collect_view()}
        </div>
    }
}
