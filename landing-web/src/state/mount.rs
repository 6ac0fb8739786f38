//! Mount flag for entrance transitions.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::mount::MountState;

use crate::utils::constants::FRAME_INTERVAL_MS;

/// Visibility flag of the calling view: `false` on first render, `true` from
/// the next frame on, never `false` again.
///
/// The flip waits one frame so the browser paints the initial pose before the
/// CSS transitions start.
pub fn use_mount_visibility() -> Signal<bool> {
    let state = RwSignal::new(MountState::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(FRAME_INTERVAL_MS).await;
            let mut first = false;
            state.try_update(|s| first = s.mount());
            if first {
                log::debug!("view mounted, starting entrance transitions");
            }
        });
    });

    Signal::derive(move || state.with(MountState::is_visible))
}
