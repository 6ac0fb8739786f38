//! # Browser Tests
//!
//! Mount the landing page into a scratch container and check what the visitor
//! sees. Run with `wasm-pack test --headless --firefox landing-web`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use landing_web::pages::LandingPage;
use landing_web::state::session::{provide_session_context, use_session_context};
use landing_web::state::theme::provide_theme_context;
use leptos::prelude::*;
use shared::content::FEATURES;
use shared::session::{SessionState, UserSummary};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn scratch_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<HtmlElement>().unwrap()
}

fn landing_view() -> impl IntoView {
    provide_session_context();
    provide_theme_context();
    view! { <LandingPage/> }
}

/// Landing page whose session flips to signed in shortly after mount.
fn signed_in_view() -> impl IntoView {
    provide_session_context();
    provide_theme_context();

    let session = use_session_context();
    leptos::task::spawn_local(async move {
        TimeoutFuture::new(10).await;
        session.set(SessionState::SignedIn(UserSummary {
            id: "user_1".into(),
            display_name: Some("Ada Lovelace".into()),
            image_url: None,
        }));
    });

    view! { <LandingPage/> }
}

fn root_is_dark() -> bool {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap()
        .class_list()
        .contains("dark")
}

fn stored_theme() -> Option<String> {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item("theme")
        .unwrap()
}

fn clear_stored_theme() {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item("theme")
        .unwrap();
}

fn style_of(container: &HtmlElement, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .get_attribute("style")
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn renders_six_feature_cards_in_order() {
    let container = scratch_container();
    let _handle = leptos::mount::mount_to(container.clone(), landing_view);

    let cards = container.query_selector_all(".feature-card").unwrap();
    assert_eq!(cards.length(), 6);

    for (i, feature) in FEATURES.iter().enumerate() {
        let card = cards.item(i as u32).unwrap();
        let text = card.text_content().unwrap_or_default();
        assert!(text.contains(feature.title), "card {i}: {text}");
        assert!(text.contains(feature.description), "card {i}: {text}");
    }
}

#[wasm_bindgen_test]
async fn signed_out_visitor_sees_entry_points_only() {
    let container = scratch_container();
    let _handle = leptos::mount::mount_to(container.clone(), landing_view);
    TimeoutFuture::new(50).await;

    // no identity provider on the test page, so the session stays signed out
    assert!(container.query_selector("[data-auth-control='sign-in']").unwrap().is_some());
    assert!(container.query_selector("[data-auth-control='sign-up']").unwrap().is_some());
    assert!(container.query_selector("[data-auth-control='user-menu']").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn signed_in_visitor_sees_user_menu_only() {
    let container = scratch_container();
    let _handle = leptos::mount::mount_to(container.clone(), signed_in_view);
    TimeoutFuture::new(100).await;

    assert!(container.query_selector("[data-auth-control='user-menu']").unwrap().is_some());
    assert!(container.query_selector("[data-auth-control='sign-in']").unwrap().is_none());
    assert!(container.query_selector("[data-auth-control='sign-up']").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn theme_toggle_switches_root_class_and_remembers_choice() {
    clear_stored_theme();
    let container = scratch_container();
    let _handle = leptos::mount::mount_to(container.clone(), landing_view);
    TimeoutFuture::new(50).await;

    // the resolved default is applied but not stored
    let was_dark = root_is_dark();
    assert_eq!(stored_theme(), None);

    let toggle = container
        .query_selector("button[aria-label='Toggle theme']")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    toggle.click();
    TimeoutFuture::new(50).await;

    assert_eq!(root_is_dark(), !was_dark);
    let expected = if was_dark { "light" } else { "dark" };
    assert_eq!(stored_theme().as_deref(), Some(expected));

    clear_stored_theme();
}

#[wasm_bindgen_test]
async fn entrance_transitions_start_after_mount() {
    let container = scratch_container();
    let _handle = leptos::mount::mount_to(container.clone(), landing_view);

    assert!(style_of(&container, "main > div").starts_with("opacity: 0;"));

    TimeoutFuture::new(100).await;
    assert!(style_of(&container, "main > div").starts_with("opacity: 1;"));
}

#[wasm_bindgen_test]
async fn call_to_action_opens_store_once() {
    let window = web_sys::window().unwrap();
    let recorder = js_sys::Function::new_with_args(
        "url, target",
        "window.__opened = (window.__opened || []).concat([[url, target]]); return {};",
    );
    js_sys::Reflect::set(&window, &JsValue::from_str("open"), &recorder).unwrap();
    js_sys::Reflect::set(&window, &JsValue::from_str("__opened"), &js_sys::Array::new()).unwrap();

    let container = scratch_container();
    let _handle = leptos::mount::mount_to(container.clone(), landing_view);
    TimeoutFuture::new(50).await;

    let button = container
        .query_selector("#cta-add-to-chrome")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    button.click();

    let opened: js_sys::Array = js_sys::Reflect::get(&window, &JsValue::from_str("__opened"))
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(opened.length(), 1);
    let call: js_sys::Array = opened.get(0).dyn_into().unwrap();
    assert_eq!(call.get(0).as_string().as_deref(), Some("https://chrome.google.com/webstore"));
    assert_eq!(call.get(1).as_string().as_deref(), Some("_blank"));
}

#[wasm_bindgen_test]
async fn logo_stops_rotating_after_unmount() {
    let container = scratch_container();
    let handle = leptos::mount::mount_to(container.clone(), landing_view);
    TimeoutFuture::new(100).await;

    let logo = container.query_selector(".brand-logo").unwrap().unwrap();
    drop(handle);

    let frozen = logo.get_attribute("style");
    TimeoutFuture::new(200).await;
    assert_eq!(logo.get_attribute("style"), frozen);
    assert!(container.query_selector(".brand-logo").unwrap().is_none());
}
