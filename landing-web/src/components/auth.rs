//! Authentication controls shown in the navigation bar.
//!
//! Which controls appear is decided by the identity provider through the
//! session context; these components only render the matching slot and
//! forward clicks to the provider.

use leptos::prelude::*;
use shared::session::{AuthControl, AuthSlot, SignInMode, UserSummary, SIGN_OUT_REDIRECT};

use crate::services::identity;
use crate::state::session::use_session_context;

#[component]
pub fn SignInButton(#[prop(optional)] mode: SignInMode) -> impl IntoView {
    let on_click = move |_| {
        if let Err(e) = identity::open_sign_in(mode) {
            log::warn!("sign-in unavailable: {}", e);
        }
    };

    view! {
        <button
            type="button"
            data-auth-control="sign-in"
            class="inline-flex items-center px-4 py-2 rounded-md text-sm font-medium hover:bg-accent hover:text-accent-foreground"
            on:click=on_click
        >
            {AuthControl::SignIn.label()}
        </button>
    }
}

#[component]
pub fn SignUpButton(#[prop(optional)] mode: SignInMode) -> impl IntoView {
    let on_click = move |_| {
        if let Err(e) = identity::open_sign_up(mode) {
            log::warn!("sign-up unavailable: {}", e);
        }
    };

    view! {
        <button
            type="button"
            data-auth-control="sign-up"
            class="inline-flex items-center px-4 py-2 rounded-md text-sm font-medium bg-primary text-primary-foreground hover:bg-primary/90"
            on:click=on_click
        >
            {AuthControl::SignUp.label()}
        </button>
    }
}

/// Avatar button with a small menu offering sign-out.
#[component]
pub fn UserMenu(after_sign_out_url: &'static str) -> impl IntoView {
    let session = use_session_context();
    let (open, set_open) = signal(false);

    let on_sign_out = move |_| {
        set_open.set(false);
        leptos::task::spawn_local(async move {
            match identity::sign_out(after_sign_out_url).await {
                Ok(()) => log::info!("signed out, returning to {}", after_sign_out_url),
                Err(e) => log::warn!("sign-out failed: {}", e),
            }
        });
    };

    let avatar = move || match session.user() {
        Some(UserSummary {
            image_url: Some(url),
            ..
        }) => view! { <img src=url alt="" class="h-8 w-8 object-cover"/> }.into_any(),
        Some(user) => view! { <span>{user.initial().to_string()}</span> }.into_any(),
        None => view! { <span>"?"</span> }.into_any(),
    };

    view! {
        <div class="relative" data-auth-control="user-menu">
            <button
                type="button"
                aria-label=AuthControl::UserMenu.label()
                class="h-8 w-8 rounded-full overflow-hidden bg-primary/10 flex items-center justify-center text-sm font-semibold"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {avatar}
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-48 rounded-md border bg-card shadow-lg p-2" role="menu">
                    <p class="px-2 py-1 text-sm text-muted-foreground truncate">
                        {move || session.user().map(|u| u.label().to_string()).unwrap_or_default()}
                    </p>
                    <button
                        type="button"
                        role="menuitem"
                        class="w-full text-left px-2 py-1 rounded text-sm hover:bg-accent"
                        on:click=on_sign_out
                    >
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// The controls of whichever slot the identity provider currently reports.
#[component]
pub fn AuthControls() -> impl IntoView {
    let session = use_session_context();
    let slot = Memo::new(move |_| session.slot());

    move || {
        let slot: AuthSlot = slot.get();
        slot.controls()
            .iter()
            .map(|control| match control {
                AuthControl::SignIn => view! { <SignInButton mode=SignInMode::Modal/> }.into_any(),
                AuthControl::SignUp => view! { <SignUpButton mode=SignInMode::Modal/> }.into_any(),
                AuthControl::UserMenu => {
                    view! { <UserMenu after_sign_out_url=SIGN_OUT_REDIRECT/> }.into_any()
                }
            })
            .collect_view()
    }
}
