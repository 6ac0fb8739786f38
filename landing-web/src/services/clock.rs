//! Frame clock backed by `performance.now()` and `setTimeout`.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use shared::motion::FrameClock;

use crate::utils::constants::FRAME_INTERVAL_MS;

#[derive(Debug, Clone, Copy)]
pub struct BrowserClock {
    frame_ms: u32,
}

impl BrowserClock {
    pub fn new(frame_ms: u32) -> Self {
        Self { frame_ms }
    }
}

impl Default for BrowserClock {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

impl FrameClock for BrowserClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn next_frame(&self) -> impl Future<Output = ()> {
        TimeoutFuture::new(self.frame_ms)
    }
}
