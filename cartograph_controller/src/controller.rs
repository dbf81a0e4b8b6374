// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cartograph_event_state::dispatch::{HandlerTable, Response};
use cartograph_event_state::event::{EventKind, InputEvent};
use cartograph_event_state::press::PressSession;
use cartograph_view::{MapViewport, ViewConfig, ZoomStep};
use kurbo::Point;
use peniko::Color;

use crate::error::SetupError;
use crate::image::SourceImage;
use crate::surface::Surface;

/// Pan/zoom controller for one map image on one drawing surface.
///
/// The controller owns the viewport, the current press session and the
/// surface it draws on. Input is fed through [`MapController::handle`], which
/// looks the event up in a [`HandlerTable`] and reports whether a redraw is
/// needed. Rendering happens only when the caller invokes
/// [`MapController::render`], typically from a frame callback.
#[derive(Debug)]
pub struct MapController<S> {
    viewport: MapViewport,
    press: PressSession,
    image: Option<SourceImage>,
    handlers: HandlerTable<Self>,
    surface: S,
}

impl<S: Surface> MapController<S> {
    /// Creates a controller drawing on `surface`, with the default handler
    /// table installed and no image attached.
    #[must_use]
    pub fn new(surface: S, config: ViewConfig) -> Self {
        let viewport = MapViewport::new(config, surface.size());
        Self {
            viewport,
            press: PressSession::default(),
            image: None,
            handlers: Self::default_handlers(),
            surface,
        }
    }

    /// The handler table installed by [`MapController::new`].
    #[must_use]
    pub fn default_handlers() -> HandlerTable<Self> {
        let mut table = HandlerTable::new();
        table.register(EventKind::Wheel, on_wheel::<S>);
        table.register(EventKind::PointerDown, on_pointer_down::<S>);
        table.register(EventKind::PointerUp, on_press_end::<S>);
        table.register(EventKind::PointerMove, on_pointer_move::<S>);
        table.register(EventKind::TouchStart, on_touch_start::<S>);
        table.register(EventKind::TouchMove, on_touch_move::<S>);
        table.register(EventKind::TouchEnd, on_press_end::<S>);
        table.register(EventKind::Resize, on_resize::<S>);
        table
    }

    /// Routes one event through the handler table.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        let handlers = self.handlers;
        handlers.dispatch(self, event)
    }

    /// Validates and attaches the natural size of the loaded map image.
    ///
    /// On error the previous image (if any) stays attached.
    pub fn set_image(&mut self, width: u32, height: u32) -> Result<(), SetupError> {
        let image = SourceImage::new(width, height)?;
        log::debug!("map image attached: {width}x{height}");
        self.image = Some(image);
        self.viewport.set_image_size(Some(image.size()));
        Ok(())
    }

    /// Clears the surface and draws the visible region of the map image
    /// scaled onto the whole surface.
    pub fn render(&mut self) {
        self.surface.clear();
        if self.image.is_none() {
            return;
        }
        let source = self.viewport.visible_source_rect();
        let dest = self.viewport.surface_rect();
        log::trace!(
            "render zoom={:.2} source={source:?} dest={dest:?}",
            self.viewport.zoom()
        );
        self.surface.draw_image(source, dest);
    }

    /// Sets one surface pixel, for callers annotating the map.
    pub fn draw_point(&mut self, at: Point, color: Color) {
        self.surface.fill_pixel(at, color);
    }

    /// Draws a one-pixel marker at a source-image position.
    ///
    /// Returns `false` without drawing if the position is outside the
    /// currently visible region.
    pub fn draw_marker(&mut self, map_point: Point, color: Color) -> bool {
        if !self.viewport.visible_source_rect().contains(map_point) {
            return false;
        }
        let at = self.viewport.source_to_surface_point(map_point);
        self.surface.fill_pixel(at, color);
        true
    }

    /// The viewport state.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// The current press session.
    #[must_use]
    pub fn press(&self) -> &PressSession {
        &self.press
    }

    /// The attached image, if one has loaded.
    #[must_use]
    pub fn image(&self) -> Option<SourceImage> {
        self.image
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the drawing surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The handler table used by [`MapController::handle`].
    #[must_use]
    pub fn handlers(&self) -> &HandlerTable<Self> {
        &self.handlers
    }

    /// Mutable access to the handler table, for replacing handlers.
    pub fn handlers_mut(&mut self) -> &mut HandlerTable<Self> {
        &mut self.handlers
    }
}

fn on_wheel<S: Surface>(c: &mut MapController<S>, event: &InputEvent) -> Response {
    let &InputEvent::Wheel { delta_y } = event else {
        return Response::Ignored;
    };
    match ZoomStep::from_wheel_delta(delta_y) {
        Some(step) => {
            c.viewport.step_zoom(step);
            Response::Redraw
        }
        None => Response::Ignored,
    }
}

fn on_pointer_down<S: Surface>(c: &mut MapController<S>, _event: &InputEvent) -> Response {
    c.press.press_mouse();
    Response::Handled
}

fn on_press_end<S: Surface>(c: &mut MapController<S>, event: &InputEvent) -> Response {
    if event.kind() == EventKind::TouchEnd {
        log::debug!("touch session ended");
    }
    c.press.release();
    Response::Handled
}

fn on_pointer_move<S: Surface>(c: &mut MapController<S>, event: &InputEvent) -> Response {
    let &InputEvent::PointerMove { movement } = event else {
        return Response::Ignored;
    };
    let Some(movement) = c.press.mouse_movement(movement) else {
        return Response::Ignored;
    };
    let speed = c.viewport.config().pan_speed;
    c.viewport.pan_by(-movement * speed);
    Response::Redraw
}

fn on_touch_start<S: Surface>(c: &mut MapController<S>, event: &InputEvent) -> Response {
    let &InputEvent::TouchStart { position } = event else {
        return Response::Ignored;
    };
    c.press.press_touch(position);
    Response::Handled
}

fn on_touch_move<S: Surface>(c: &mut MapController<S>, event: &InputEvent) -> Response {
    let &InputEvent::TouchMove { position } = event else {
        return Response::Ignored;
    };
    match c.press.touch_sample(position) {
        Some(delta) => {
            let config = c.viewport.config();
            let speed = config.pan_speed * config.touch_pan_scale;
            c.viewport.pan_by(-delta * speed);
            Response::Redraw
        }
        // First sample of a session only primes the tracker.
        None if c.press.touch_start().is_some() => Response::Handled,
        None => Response::Ignored,
    }
}

fn on_resize<S: Surface>(c: &mut MapController<S>, event: &InputEvent) -> Response {
    let &InputEvent::Resize { size } = event else {
        return Response::Ignored;
    };
    log::debug!("surface resized to {}x{}", size.width, size.height);
    c.viewport.resize(size);
    c.surface.resize(size);
    Response::Redraw
}
