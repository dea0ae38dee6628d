// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit overlay.
//!
//! Enters edit mode, drags the start button with one finger, pinches the
//! d-pad with two, and persists both customizations into the settings
//! through the context's sink.
//!
//! Run:
//! - `cargo run -p padkit_demos --example edit_overlay`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use lemuroid_touch::edit::{ControlEditContext, CustomizableControl, EditMode};
use lemuroid_touch::gesture::PointerChange;
use lemuroid_touch::settings::TouchControllerSettings;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() {
    init_logging();

    let settings = Rc::new(RefCell::new(TouchControllerSettings::default()));
    let mut context = ControlEditContext::new();
    let sink = Rc::clone(&settings);
    context.set_sink(move |button: &str, customization| {
        sink.borrow_mut().set_customization(button, customization);
    });
    context.set_mode(EditMode::Edit);

    let mut start = CustomizableControl::new("start", &settings.borrow());
    let mut cross = CustomizableControl::new("cross", &settings.borrow());

    let drag = (0..10)
        .map(|i| {
            let x = f64::from(i) * 4.0;
            let to = Point::new(x + 4.0, -2.0 * f64::from(i));
            vec![PointerChange::moved(0, Point::new(x, 0.0), to)]
        })
        .chain([vec![PointerChange::released(0, Point::new(40.0, -18.0))]]);
    start.run_gesture(drag, &mut context);

    let pinch = (1..=5)
        .map(|i| {
            let from = 40.0 + 10.0 * f64::from(i - 1);
            let to = 40.0 + 10.0 * f64::from(i);
            vec![
                PointerChange::moved(1, Point::new(-from, 0.0), Point::new(-to, 0.0)),
                PointerChange::moved(2, Point::new(from, 0.0), Point::new(to, 0.0)),
            ]
        })
        .chain([vec![
            PointerChange::released(1, Point::new(-90.0, 0.0)),
            PointerChange::released(2, Point::new(90.0, 0.0)),
        ]]);
    cross.run_gesture(pinch, &mut context);

    context.reset();
    let settings = settings.borrow();
    for control in [&start, &cross] {
        let t = control.transform(&settings, &context);
        info!(button = control.button_id(), offset = ?t.offset, scale = t.scale, "placed");
    }
    if let Err(err) = settings.validate() {
        warn!(%err, "invalid settings");
    }
}
