//! ChatWithYoutube Web App - Leptos Frontend
//!
//! Router shell and the app-wide contexts (identity session, theme).

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::pages::LandingPage;
use crate::state::session::provide_session_context;
use crate::state::theme::provide_theme_context;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();
    provide_theme_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-background text-foreground">
            <div class="max-w-md p-8 rounded-lg border bg-card text-center">
                <h1 class="text-3xl font-bold mb-4">"404 - Page Not Found"</h1>
                <p class="text-muted-foreground mb-6">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="inline-block px-4 py-2 rounded-md bg-primary text-primary-foreground">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
