// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use cartograph_controller::MapController;
use cartograph_event_state::event::{EventKind, InputEvent};
use cartograph_view::ViewConfig;
use kurbo::Point;
use peniko::Color;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, HtmlCanvasElement, HtmlImageElement, Window};

use crate::canvas::CanvasSurface;
use crate::color::parse_css_color;
use crate::error::MountError;
use crate::frame::FrameScheduler;
use crate::listeners::{EventListener, translate, window_size};

type SharedController = Rc<RefCell<MapController<CanvasSurface>>>;

/// A map view mounted on a page.
///
/// Owns the controller, the frame scheduler and every DOM listener it
/// registered. Dropping the view unregisters the listeners and cancels any
/// pending frame.
#[wasm_bindgen]
#[derive(Debug)]
pub struct MapView {
    controller: SharedController,
    scheduler: Rc<FrameScheduler>,
    listeners: Vec<EventListener>,
}

impl MapView {
    /// Wires a controller to `canvas` and `image`.
    ///
    /// The canvas is immediately sized to the window. The map is first drawn
    /// once `image` has loaded (or right away if it already has).
    pub fn new(
        canvas: HtmlCanvasElement,
        image: HtmlImageElement,
        config: ViewConfig,
    ) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;

        let mut surface = CanvasSurface::new(canvas.clone())?;
        surface.attach_image(image.clone());
        let mut controller = MapController::new(surface, config);
        if let Some(size) = window_size(&window) {
            controller.handle(&InputEvent::Resize { size });
        }
        let controller: SharedController = Rc::new(RefCell::new(controller));

        let weak = Rc::downgrade(&controller);
        let scheduler = Rc::new(FrameScheduler::new(window.clone(), move || {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => controller.render(),
                Err(_) => log::warn!("skipped frame: controller busy"),
            };
        }));

        let mut view = Self {
            controller,
            scheduler,
            listeners: Vec::new(),
        };

        let canvas_target: &EventTarget = canvas.as_ref();
        let window_target: &EventTarget = window.as_ref();
        for kind in EventKind::ALL {
            let target = match kind {
                EventKind::Resize => window_target,
                _ => canvas_target,
            };
            view.listen(target, kind.dom_name(), kind, &window)?;
        }
        // A cancelled touch ends the session just like a lifted finger.
        view.listen(canvas_target, "touchcancel", EventKind::TouchEnd, &window)?;

        let controller = view.controller.clone();
        let scheduler = view.scheduler.clone();
        let loaded_image = image.clone();
        let on_load = EventListener::new(image.as_ref(), "load", move |_| {
            image_loaded(&controller, &scheduler, &loaded_image);
        })?;
        view.listeners.push(on_load);

        if image.complete() && image.natural_width() > 0 {
            image_loaded(&view.controller, &view.scheduler, &image);
        }

        Ok(view)
    }

    /// Sets one canvas pixel, for annotating the map.
    pub fn draw_point(&self, at: Point, color: Color) {
        self.controller.borrow_mut().draw_point(at, color);
    }

    /// Draws a one-pixel marker at a map-image position if it is visible.
    pub fn draw_marker(&self, map_point: Point, color: Color) -> bool {
        self.controller.borrow_mut().draw_marker(map_point, color)
    }

    /// Shared handle to the controller.
    #[must_use]
    pub fn controller(&self) -> &Rc<RefCell<MapController<CanvasSurface>>> {
        &self.controller
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        name: &'static str,
        kind: EventKind,
        window: &Window,
    ) -> Result<(), MountError> {
        let controller = self.controller.clone();
        let scheduler = self.scheduler.clone();
        let window = window.clone();
        let listener = EventListener::new(target, name, move |event| {
            if let Some(input) = translate(kind, &event, &window) {
                dispatch(&controller, &scheduler, &input);
            }
        })?;
        self.listeners.push(listener);
        Ok(())
    }
}

#[wasm_bindgen]
impl MapView {
    /// Sets one canvas pixel to a CSS color.
    #[wasm_bindgen(js_name = drawPoint)]
    pub fn draw_point_css(&self, x: f64, y: f64, color: &str) -> Result<(), JsValue> {
        let color = parse_css_color(color)
            .ok_or_else(|| JsValue::from(js_sys::Error::new("unrecognized CSS color")))?;
        self.draw_point(Point::new(x, y), color);
        Ok(())
    }

    /// Current zoom factor.
    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.controller.borrow().viewport().zoom()
    }

    /// Current horizontal pan offset in map pixels.
    #[wasm_bindgen(getter, js_name = panX)]
    pub fn pan_x(&self) -> f64 {
        self.controller.borrow().viewport().pan().x
    }

    /// Current vertical pan offset in map pixels.
    #[wasm_bindgen(getter, js_name = panY)]
    pub fn pan_y(&self) -> f64 {
        self.controller.borrow().viewport().pan().y
    }
}

fn dispatch(controller: &SharedController, scheduler: &FrameScheduler, event: &InputEvent) {
    let response = controller.borrow_mut().handle(event);
    if response.needs_redraw() {
        scheduler.request();
    }
}

fn image_loaded(controller: &SharedController, scheduler: &FrameScheduler, image: &HtmlImageElement) {
    let (width, height) = (image.natural_width(), image.natural_height());
    match controller.borrow_mut().set_image(width, height) {
        Ok(()) => scheduler.request(),
        Err(err) => log::error!("map image rejected: {err}"),
    }
}

/// Mounts a map view on the canvas with id `canvas_id`, showing the image at
/// `image_url` with the default configuration.
pub fn mount(canvas_id: &str, image_url: &str) -> Result<MapView, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| MountError::CanvasNotFound(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(canvas_id.to_owned()))?;
    let image = HtmlImageElement::new()?;
    image.set_src(image_url);
    MapView::new(canvas, image, ViewConfig::default())
}

/// JavaScript entry point for [`mount`].
#[wasm_bindgen(js_name = mount)]
pub fn mount_js(canvas_id: &str, image_url: &str) -> Result<MapView, JsValue> {
    mount(canvas_id, image_url).map_err(JsValue::from)
}
