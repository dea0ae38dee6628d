// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PadKit: touch pointer resolution for virtual gamepads.
//!
//! ## Overview
//!
//! A virtual gamepad is a set of controls drawn on a touch screen. This
//! crate turns the fingers currently on the screen into an
//! [`InputState`](padkit_state::state::InputState) describing every control.
//!
//! - [`anchors`] and [`geometry`]: where buttons and directions sit in a
//!   control's local `[-1, 1]²` space, and nearest-anchor resolution.
//! - [`handlers`]: one [`PointerHandler`](crate::handlers::PointerHandler)
//!   per control kind (button, d-pad, analog stick, face-button cluster).
//! - [`scope`]: the [`DispatchScope`](crate::scope::DispatchScope), which
//!   routes each pointer to exactly one handler and folds their results.
//! - [`controls`]: builders that register the stock handlers on a scope.
//! - [`haptics`]: feedback pulses derived from state transitions.
//! - [`pad`]: [`PadKit`](crate::pad::PadKit), the per-gamepad front object
//!   returning states and edge events.
//!
//! Rendering, layout, and the platform input pipeline belong to the host.
//!
//! ## Routing
//!
//! Ownership of a pointer is sticky: once a handler tracks a pointer id it
//! receives that pointer on every frame until it lifts, wherever the finger
//! moves. Untracked pointers go to the first control whose rectangle
//! contains them.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Rect, Vec2};
//! use padkit::config::PadConfig;
//! use padkit::controls::{ControlButton, ControlCross};
//! use padkit::haptics::{HapticFeedbackType, NoHaptics};
//! use padkit::pad::{PadKit, RawPointer};
//! use padkit_state::ids::{DiscreteDirectionId, KeyId};
//!
//! let dpad = DiscreteDirectionId(0);
//! let start = KeyId(9);
//! let mut pad = PadKit::new(PadConfig::default(), NoHaptics, HapticFeedbackType::PRESS);
//! ControlCross::new(dpad)
//!     .rect(Rect::new(0.0, 100.0, 200.0, 300.0))
//!     .register(pad.scope_mut());
//! ControlButton::new(start)
//!     .rect(Rect::new(300.0, 280.0, 340.0, 320.0))
//!     .register(pad.scope_mut());
//!
//! // One finger on the right of the d-pad, one on start.
//! let frame = [
//!     RawPointer { id: 1, position: Point::new(190.0, 200.0), pressed: true },
//!     RawPointer { id: 2, position: Point::new(320.0, 300.0), pressed: true },
//! ];
//! let update = pad.on_pointer_frame(&frame, Duration::ZERO).unwrap();
//! assert_eq!(update.state.discrete_direction(dpad), Some(Vec2::new(1.0, 0.0)));
//! assert!(update.state.digital_key(start));
//! assert_eq!(update.events.len(), 2);
//! ```

pub mod anchors;
pub mod config;
pub mod controls;
pub mod geometry;
pub mod handlers;
pub mod haptics;
pub mod pad;
pub mod scope;
