//! Stroke icons (Lucide geometry) rendered as inline SVG.

use leptos::prelude::*;
use shared::content::Glyph;

fn glyph_paths(glyph: Glyph) -> &'static [&'static str] {
    match glyph {
        Glyph::Youtube => &[
            "M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17",
            "m10 15 5-3-5-3z",
        ],
        Glyph::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        Glyph::FastForward => &["M13 19 22 12 13 5z", "M2 19 11 12 2 5z"],
        Glyph::Search => &["M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "m21 21-4.3-4.3"],
        Glyph::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
        Glyph::FileText => &[
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M10 9H8",
            "M16 13H8",
            "M16 17H8",
        ],
        Glyph::ChefHat => &[
            "M17 21a1 1 0 0 0 1-1v-5.35c0-.457.316-.844.727-1.041a4 4 0 0 0-2.134-7.589 5 5 0 0 0-9.186 0 4 4 0 0 0-2.134 7.588c.411.198.727.585.727 1.041V20a1 1 0 0 0 1 1Z",
            "M6 17h12",
        ],
        Glyph::Chrome => &[
            "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
            "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M21.17 8H12",
            "M3.95 6.06 8.54 14",
            "M10.88 21.94 15.46 14",
        ],
        Glyph::Sun => &[
            "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            "M12 2v2",
            "M12 20v2",
            "m4.93 4.93 1.41 1.41",
            "m17.66 17.66 1.41 1.41",
            "M2 12h2",
            "M20 12h2",
            "m6.34 17.66-1.41 1.41",
            "m19.07 4.93-1.41 1.41",
        ],
        Glyph::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
    }
}

#[component]
pub fn Icon(glyph: Glyph, #[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            role="img"
            aria-label=glyph.label()
        >
            {glyph_paths(glyph)
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect_view()}
        </svg>
    }
}
