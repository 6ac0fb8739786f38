//! Keyframe animations bound to a component's lifetime.

use leptos::prelude::*;
use shared::motion::{run_keyframe_loop, Keyframes, LoopHandle};

use crate::services::BrowserClock;

/// Start `keyframes` when the calling component is created and stop them when
/// it is cleaned up. Returns the current sampled value.
pub fn use_keyframes(keyframes: Keyframes) -> ReadSignal<f64> {
    let (value, set_value) = signal(keyframes.sample(0.0));
    let handle = LoopHandle::new();
    let worker = handle.clone();

    leptos::task::spawn_local(async move {
        log::debug!("keyframe loop started");
        run_keyframe_loop(worker, keyframes, BrowserClock::default(), move |v| {
            set_value.set(v);
        })
        .await;
    });

    on_cleanup(move || handle.cancel());

    value
}
