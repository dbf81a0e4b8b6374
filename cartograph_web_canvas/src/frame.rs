// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;

/// Handle of the one outstanding `requestAnimationFrame` callback, if any.
///
/// At most one request is outstanding at a time. The handle is kept so the
/// request can be cancelled when its callback is about to be freed.
#[derive(Debug, Default)]
#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "Driven by the wasm frame scheduler; host builds only test it.")
)]
pub(crate) struct PendingFrame {
    handle: Cell<Option<i32>>,
}

#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "Driven by the wasm frame scheduler; host builds only test it.")
)]
impl PendingFrame {
    /// Returns `true` while a request is outstanding.
    pub(crate) fn is_pending(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Runs `request` unless a request is already outstanding, and records
    /// the handle it returns.
    ///
    /// Returns `true` if `request` was called. A request that returns `None`
    /// (it failed) leaves nothing outstanding.
    pub(crate) fn schedule(&self, request: impl FnOnce() -> Option<i32>) -> bool {
        if self.is_pending() {
            return false;
        }
        self.handle.set(request());
        true
    }

    /// Marks the outstanding request as delivered.
    pub(crate) fn fired(&self) {
        self.handle.set(None);
    }

    /// Clears and returns the handle of the outstanding request.
    pub(crate) fn take(&self) -> Option<i32> {
        self.handle.take()
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use scheduler::FrameScheduler;

#[cfg(target_arch = "wasm32")]
mod scheduler {
    use std::fmt;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::Window;

    use super::PendingFrame;

    /// Coalesces redraw requests into at most one `requestAnimationFrame`
    /// callback per frame.
    ///
    /// The frame closure is created once and reused for every request.
    /// Dropping the scheduler cancels an outstanding request, so the browser
    /// never calls the freed closure.
    pub(crate) struct FrameScheduler {
        window: Window,
        pending: Rc<PendingFrame>,
        callback: Closure<dyn FnMut(f64)>,
    }

    impl FrameScheduler {
        /// Creates a scheduler that runs `on_frame` on the next frame after
        /// each batch of requests.
        pub(crate) fn new(window: Window, mut on_frame: impl FnMut() + 'static) -> Self {
            let pending = Rc::new(PendingFrame::default());
            let flag = pending.clone();
            let callback = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
                flag.fired();
                on_frame();
            });
            Self {
                window,
                pending,
                callback,
            }
        }

        /// Requests a frame unless one is already pending.
        pub(crate) fn request(&self) {
            self.pending.schedule(|| {
                match self
                    .window
                    .request_animation_frame(self.callback.as_ref().unchecked_ref())
                {
                    Ok(handle) => Some(handle),
                    Err(err) => {
                        log::warn!("requestAnimationFrame failed: {err:?}");
                        None
                    }
                }
            });
        }
    }

    impl Drop for FrameScheduler {
        fn drop(&mut self) {
            if let Some(handle) = self.pending.take() {
                if let Err(err) = self.window.cancel_animation_frame(handle) {
                    log::warn!("cancelAnimationFrame failed: {err:?}");
                }
            }
        }
    }

    impl fmt::Debug for FrameScheduler {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("FrameScheduler")
                .field("pending", &self.pending.is_pending())
                .finish_non_exhaustive()
        }
    }
}
