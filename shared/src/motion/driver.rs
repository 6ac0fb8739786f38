//! Cancellable frame loop for keyframe animations.
//!
//! The loop is an ordinary async task: it samples the keyframes, hands the
//! value to a callback, then waits one frame on the [`FrameClock`]. Cancelling
//! the [`LoopHandle`] (normally from the owning component's cleanup) makes the
//! task return at its next wake-up without touching the callback again.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::keyframes::Keyframes;

/// Shared run flag between a running loop and its owner.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.running.store(false, Ordering::Release);
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Time source and frame pacing for [`run_keyframe_loop`].
pub trait FrameClock {
    /// Monotonic timestamp in milliseconds.
    fn now_ms(&self) -> f64;

    /// Resolves when the next frame is due.
    fn next_frame(&self) -> impl Future<Output = ()>;
}

/// Play `keyframes` until `handle` is cancelled or a finite sequence ends.
///
/// Returns the number of frames delivered to `on_frame`.
pub async fn run_keyframe_loop<C, F>(
    handle: LoopHandle,
    keyframes: Keyframes,
    clock: C,
    mut on_frame: F,
) -> u64
where
    C: FrameClock,
    F: FnMut(f64),
{
    let started = clock.now_ms();
    let mut frames = 0u64;

    while handle.is_running() {
        let elapsed = clock.now_ms() - started;
        on_frame(keyframes.sample(elapsed));
        frames += 1;

        if keyframes.is_finished(elapsed) {
            break;
        }
        clock.next_frame().await;
    }

    log::debug!("keyframe loop stopped after {frames} frames");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Easing, Repeat, LOGO_WOBBLE};
    use std::cell::Cell;

    /// Clock that advances a fixed step per frame without real waiting.
    struct SteppedClock {
        now: Cell<f64>,
        step_ms: f64,
    }

    impl SteppedClock {
        fn new(step_ms: f64) -> Self {
            Self {
                now: Cell::new(0.0),
                step_ms,
            }
        }
    }

    impl FrameClock for &SteppedClock {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }

        async fn next_frame(&self) {
            self.now.set(self.now.get() + self.step_ms);
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_cancel_stops_loop() {
        let clock = SteppedClock::new(16.0);
        let handle = LoopHandle::new();
        let owner = handle.clone();
        let mut seen = Vec::new();

        let frames = run_keyframe_loop(handle, LOGO_WOBBLE, &clock, |angle| {
            seen.push(angle);
            if seen.len() == 10 {
                owner.cancel();
            }
        })
        .await;

        assert_eq!(frames, 10);
        assert_eq!(seen.len(), 10);
        assert_eq!(seen[0], 0.0);
        assert!(!owner.is_running());
    }

    #[tokio::test]
    async fn test_cancelled_before_start_delivers_nothing() {
        let clock = SteppedClock::new(16.0);
        let handle = LoopHandle::new();
        handle.cancel();

        let mut calls = 0;
        let frames = run_keyframe_loop(handle, LOGO_WOBBLE, &clock, |_| calls += 1).await;

        assert_eq!(frames, 0);
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_no_frames_after_teardown() {
        // the owner cancels from outside while the loop is parked between frames
        let clock = SteppedClock::new(16.0);
        let handle = LoopHandle::new();
        let owner = handle.clone();
        let delivered = Cell::new(0u64);

        let animation = run_keyframe_loop(handle, LOGO_WOBBLE, &clock, |_| {
            delivered.set(delivered.get() + 1);
        });
        let teardown = async {
            while delivered.get() < 5 {
                tokio::task::yield_now().await;
            }
            owner.cancel();
        };
        let (frames, ()) = tokio::join!(animation, teardown);

        assert_eq!(frames, delivered.get());
        assert!(frames >= 5);
        let after = delivered.get();
        tokio::task::yield_now().await;
        assert_eq!(delivered.get(), after);
    }

    #[tokio::test]
    async fn test_finite_sequence_ends_on_its_own() {
        let clock = SteppedClock::new(25.0);
        let once = Keyframes {
            values: &[0.0, 1.0],
            duration_ms: 100.0,
            easing: Easing::Linear,
            repeat: Repeat::Once,
        };
        let mut last = 0.0;
        let frames = run_keyframe_loop(LoopHandle::new(), once, &clock, |v| last = v).await;

        assert_eq!(frames, 5);
        assert_eq!(last, 1.0);
    }
}
