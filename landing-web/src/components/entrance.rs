//! Wrapper applying an entrance transition once the view has mounted.

use leptos::prelude::*;
use shared::motion::Reveal;

#[component]
pub fn Entrance(
    reveal: Reveal,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=class style=move || reveal.style(visible.get())>
            {children()}
        </div>
    }
}
