// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use cartograph_event_state::event::{EventKind, InputEvent};
use kurbo::{Point, Size, Vec2};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, MouseEvent, Touch, TouchEvent, WheelEvent, Window};

/// A DOM event listener that is removed again when dropped.
pub(crate) struct EventListener {
    target: EventTarget,
    name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Adds `handler` as a listener for `name` events on `target`.
    pub(crate) fn new(
        target: &EventTarget,
        name: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            name,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.name, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("removing {} listener failed: {err:?}", self.name);
        }
    }
}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn touch_position(touch: &Touch) -> Point {
    Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()))
}

/// Current inner size of the window.
pub(crate) fn window_size(window: &Window) -> Option<Size> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

/// Translates a DOM event into an [`InputEvent`] of the given kind.
///
/// Returns `None` if the event does not carry the expected data (for example
/// a touch event with an empty changed-touches list).
pub(crate) fn translate(kind: EventKind, event: &Event, window: &Window) -> Option<InputEvent> {
    match kind {
        EventKind::Wheel => {
            let wheel = event.dyn_ref::<WheelEvent>()?;
            Some(InputEvent::Wheel {
                delta_y: wheel.delta_y(),
            })
        }
        EventKind::PointerDown => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::PointerDown {
                position: Point::new(f64::from(mouse.offset_x()), f64::from(mouse.offset_y())),
            })
        }
        EventKind::PointerUp => Some(InputEvent::PointerUp),
        EventKind::PointerMove => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::PointerMove {
                movement: Vec2::new(
                    f64::from(mouse.movement_x()),
                    f64::from(mouse.movement_y()),
                ),
            })
        }
        EventKind::TouchStart => {
            let touches = event.dyn_ref::<TouchEvent>()?.changed_touches();
            let first = touches.get(0)?;
            Some(InputEvent::TouchStart {
                position: touch_position(&first),
            })
        }
        EventKind::TouchMove => {
            let touches = event.dyn_ref::<TouchEvent>()?.changed_touches();
            let last = touches.get(touches.length().checked_sub(1)?)?;
            Some(InputEvent::TouchMove {
                position: touch_position(&last),
            })
        }
        EventKind::TouchEnd => Some(InputEvent::TouchEnd),
        EventKind::Resize => Some(InputEvent::Resize {
            size: window_size(window)?,
        }),
    }
}
