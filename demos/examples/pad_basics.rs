// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pad basics.
//!
//! Lays out a d-pad, a clickable stick, four face buttons and start, then
//! replays a short script of touch frames and logs the edge events. Set
//! `RUST_LOG=trace` to watch the routing.
//!
//! Run:
//! - `cargo run -p padkit_demos --example pad_basics`

use std::time::Duration;

use kurbo::{Point, Rect};
use padkit::config::PadConfig;
use padkit::controls::{ControlAnalog, ControlButton, ControlCross, ControlFaceButtons};
use padkit::haptics::{HapticFeedbackType, HapticKind};
use padkit::pad::{PadKit, RawPointer};
use padkit_state::ids::{ContinuousDirectionId, DiscreteDirectionId, KeyId};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const A: KeyId = KeyId(0);
const B: KeyId = KeyId(1);
const X: KeyId = KeyId(2);
const Y: KeyId = KeyId(3);
const START: KeyId = KeyId(9);
const L3: KeyId = KeyId(10);

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn down(id: u64, x: f64, y: f64) -> RawPointer {
    RawPointer {
        id,
        position: Point::new(x, y),
        pressed: true,
    }
}

fn main() {
    init_logging();

    let mut pad = PadKit::new(
        PadConfig::default(),
        |kind: HapticKind| info!(?kind, "haptic"),
        HapticFeedbackType::PRESS_RELEASE,
    );
    let scope = pad.scope_mut();
    ControlCross::new(DiscreteDirectionId(0))
        .rect(Rect::new(20.0, 250.0, 220.0, 450.0))
        .register(scope);
    ControlAnalog::new(ContinuousDirectionId(0))
        .press_id(L3)
        .rect(Rect::new(240.0, 330.0, 360.0, 450.0))
        .register(scope);
    // A right, X top, Y left, B bottom.
    ControlFaceButtons::new(&[A, X, Y, B], 0.0)
        .rect(Rect::new(780.0, 250.0, 980.0, 450.0))
        .register(scope);
    ControlButton::new(START)
        .rect(Rect::new(475.0, 440.0, 525.0, 490.0))
        .register(scope);

    let script: Vec<(&str, Vec<RawPointer>)> = vec![
        ("d-pad right", vec![down(1, 210.0, 350.0)]),
        ("slide to up-right", vec![down(1, 200.0, 265.0)]),
        ("add A", vec![down(1, 200.0, 265.0), down(2, 960.0, 350.0)]),
        ("chord A+X", vec![down(1, 200.0, 265.0), down(2, 930.0, 300.0)]),
        ("release all", vec![]),
        ("stick down", vec![down(3, 300.0, 390.0)]),
        ("stick drag", vec![down(3, 330.0, 360.0)]),
        ("stick far outside", vec![down(3, 600.0, 100.0)]),
        ("stick release", vec![]),
        ("double tap stick", vec![down(4, 300.0, 390.0)]),
        ("start", vec![down(4, 300.0, 390.0), down(5, 500.0, 465.0)]),
        ("release all", vec![]),
    ];

    for (i, (label, frame)) in script.into_iter().enumerate() {
        let now = Duration::from_millis(100 * i as u64);
        match pad.on_pointer_frame(&frame, now) {
            Some(update) => {
                for event in &update.events {
                    info!(step = label, ?event);
                }
            }
            None => info!(step = label, "no change"),
        }
    }
}
