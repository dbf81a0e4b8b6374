// Copyright 2025 the Cartograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `cartograph_view` crate.
//!
//! These sweep zoom and pan requests across wide ranges and check that the
//! viewport never leaves its legal state.

use cartograph_view::{MapViewport, ViewConfig, ZoomStep};
use kurbo::{Point, Size, Vec2};

fn map_viewport() -> MapViewport {
    let mut vp = MapViewport::new(ViewConfig::default(), Size::new(640.0, 480.0));
    vp.set_image_size(Some(Size::new(2048.0, 4096.0)));
    vp
}

#[test]
fn zoom_stays_in_range_for_any_step_sequence() {
    let mut vp = map_viewport();
    // A deterministic zig-zag of long runs in both directions.
    for run in 0..40 {
        let step = if run % 3 == 0 {
            ZoomStep::Out
        } else {
            ZoomStep::In
        };
        for _ in 0..(run * 7 % 23) {
            vp.step_zoom(step);
            assert!(
                (1.0..=12.0).contains(&vp.zoom()),
                "zoom {} escaped its limits",
                vp.zoom()
            );
        }
    }
}

#[test]
fn pan_stays_in_range_for_any_delta() {
    let mut vp = map_viewport();
    let max = vp.max_pan();
    assert_eq!(max, Vec2::new(2048.0 - 640.0, 4096.0 - 480.0));

    let deltas = [
        Vec2::new(-1e6, 3.0),
        Vec2::new(250.5, -17.25),
        Vec2::new(1e9, 1e9),
        Vec2::new(-3.0, -1e9),
        Vec2::new(0.0, 812.0),
    ];
    for _ in 0..10 {
        for delta in deltas {
            vp.pan_by(delta);
            let pan = vp.pan();
            assert!(
                (0.0..=max.x).contains(&pan.x),
                "pan.x {} outside [0, {}]",
                pan.x,
                max.x
            );
            assert!(
                (0.0..=max.y).contains(&pan.y),
                "pan.y {} outside [0, {}]",
                pan.y,
                max.y
            );
        }
    }
}

#[test]
fn resize_after_interaction_restores_defaults() {
    let mut vp = map_viewport();
    vp.step_zoom(ZoomStep::In);
    vp.pan_to(Point::new(300.0, 900.0));

    vp.resize(Size::new(1920.0, 1080.0));

    assert_eq!(vp.zoom(), 3.0);
    assert_eq!(vp.pan(), Point::ZERO);
    assert_eq!(vp.surface_size(), Size::new(1920.0, 1080.0));
    assert_eq!(vp.max_pan(), Vec2::new(128.0, 4096.0 - 1080.0));
}

#[test]
fn custom_limits_are_honored() {
    let config = ViewConfig::default()
        .with_zoom_limits(2.0, 4.0)
        .with_initial_zoom(2.5);
    let mut vp = MapViewport::new(config, Size::new(100.0, 100.0));
    assert_eq!(vp.zoom(), 2.5);

    vp.set_zoom(100.0);
    assert_eq!(vp.zoom(), 4.0);
    vp.set_zoom(-3.0);
    assert_eq!(vp.zoom(), 2.0);
}
