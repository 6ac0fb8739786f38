//! Identity Provider Integration via wasm-bindgen
//!
//! Thin bindings over the hosted identity provider loaded by `index.html`
//! (`window.Clerk`). The provider owns sign-in, sign-up, the session and
//! sign-out; this module only loads it, reads the current user, subscribes to
//! session changes and forwards the visitor's button presses.

use gloo_timers::future::TimeoutFuture;
use shared::session::{SessionState, SignInMode, UserSummary};
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::utils::constants::{IDENTITY_POLL_ATTEMPTS, IDENTITY_POLL_INTERVAL_MS};

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider script is not loaded")]
    Unavailable,

    #[error("identity provider rejected {action}: {message}")]
    Rejected {
        action: &'static str,
        message: String,
    },

    #[error("unexpected user payload: {0}")]
    Payload(String),
}

// ============================================================================
// PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function provider() {
    if (typeof window.Clerk === 'undefined' || window.Clerk === null) {
        throw new Error('window.Clerk is not defined');
    }
    return window.Clerk;
}

function summarize(user) {
    if (!user) {
        return null;
    }
    const email = user.primaryEmailAddress ? user.primaryEmailAddress.emailAddress : null;
    return {
        id: user.id,
        display_name: user.fullName || user.username || email || null,
        image_url: user.imageUrl || null
    };
}

export function identityAvailable() {
    return typeof window.Clerk !== 'undefined' && window.Clerk !== null;
}

export async function loadIdentity() {
    const clerk = provider();
    if (!clerk.loaded) {
        await clerk.load();
    }
}

export function currentUser() {
    return identityAvailable() ? summarize(window.Clerk.user) : null;
}

export function subscribeSession(callback) {
    return provider().addListener((resources) => callback(summarize(resources.user)));
}

export function openSignIn(mode) {
    const clerk = provider();
    if (mode === 'redirect') {
        clerk.redirectToSignIn();
    } else {
        clerk.openSignIn();
    }
}

export function openSignUp(mode) {
    const clerk = provider();
    if (mode === 'redirect') {
        clerk.redirectToSignUp();
    } else {
        clerk.openSignUp();
    }
}

export async function signOut(redirectUrl) {
    await provider().signOut({ redirectUrl: redirectUrl });
}
")]
extern "C" {
    fn identityAvailable() -> bool;

    #[wasm_bindgen(catch)]
    async fn loadIdentity() -> Result<JsValue, JsValue>;

    fn currentUser() -> JsValue;

    #[wasm_bindgen(catch)]
    fn subscribeSession(callback: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    fn openSignIn(mode: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn openSignUp(mode: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn signOut(redirect_url: &str) -> Result<JsValue, JsValue>;
}

// ============================================================================
// IDENTITY SERVICE
// ============================================================================

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn rejected(action: &'static str) -> impl Fn(JsValue) -> IdentityError {
    move |e| IdentityError::Rejected {
        action,
        message: js_message(&e),
    }
}

fn ensure_available() -> Result<(), IdentityError> {
    if identityAvailable() {
        Ok(())
    } else {
        Err(IdentityError::Unavailable)
    }
}

/// Decode the provider's user summary (or `null`) into a session state.
fn decode_session(value: JsValue) -> Result<SessionState, IdentityError> {
    serde_wasm_bindgen::from_value::<Option<UserSummary>>(value)
        .map(SessionState::from_user)
        .map_err(|e| IdentityError::Payload(e.to_string()))
}

/// The provider script is loaded `async`, so give it a moment to appear.
async fn wait_for_provider() -> Result<(), IdentityError> {
    for _ in 0..IDENTITY_POLL_ATTEMPTS {
        if identityAvailable() {
            return Ok(());
        }
        TimeoutFuture::new(IDENTITY_POLL_INTERVAL_MS).await;
    }
    ensure_available()
}

/// Load the provider and report the session it restored.
pub async fn load() -> Result<SessionState, IdentityError> {
    wait_for_provider().await?;
    loadIdentity().await.map_err(rejected("load"))?;
    current_session()
}

pub fn current_session() -> Result<SessionState, IdentityError> {
    decode_session(currentUser())
}

/// Call `on_change` every time the provider reports a session change.
///
/// The listener stays registered for the lifetime of the page.
pub fn watch_session<F>(mut on_change: F) -> Result<(), IdentityError>
where
    F: FnMut(Result<SessionState, IdentityError>) + 'static,
{
    ensure_available()?;
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
        on_change(decode_session(user));
    });
    subscribeSession(&callback).map_err(rejected("session subscription"))?;
    callback.forget();
    Ok(())
}

pub fn open_sign_in(mode: SignInMode) -> Result<(), IdentityError> {
    ensure_available()?;
    openSignIn(mode.as_str()).map_err(rejected("sign-in"))
}

pub fn open_sign_up(mode: SignInMode) -> Result<(), IdentityError> {
    ensure_available()?;
    openSignUp(mode.as_str()).map_err(rejected("sign-up"))
}

/// End the session; the provider then navigates to `redirect_url`.
pub async fn sign_out(redirect_url: &str) -> Result<(), IdentityError> {
    ensure_available()?;
    signOut(redirect_url).await.map_err(rejected("sign-out"))?;
    Ok(())
}
