// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PadKit State: the value model of a virtual gamepad.
//!
//! ## Overview
//!
//! This crate holds the data that flows out of the touch engine:
//!
//! - [`ids`]: three independent namespaces of control identifiers (keys,
//!   continuous directions, discrete directions) and the [`Id`](crate::ids::Id) union.
//! - [`state`]: [`InputState`](crate::state::InputState), an immutable-by-convention
//!   snapshot of every control value, plus [`merge_simulated`](crate::state::merge_simulated).
//! - [`events`]: edge-triggered [`InputEvent`](crate::events::InputEvent)s derived
//!   by diffing consecutive snapshots.
//!
//! It does not know about pointers, rectangles, or handlers; the `padkit` crate
//! produces states and this crate describes them.
//!
//! ## Example
//!
//! ```
//! use kurbo::Vec2;
//! use padkit_state::events::{InputEvent, events_from_states};
//! use padkit_state::ids::{DiscreteDirectionId, KeyId};
//! use padkit_state::state::InputState;
//!
//! let dpad = DiscreteDirectionId(0);
//! let frames = vec![
//!     InputState::new().with_discrete_direction(dpad, Some(Vec2::new(0.0, 1.0))),
//!     InputState::new()
//!         .with_discrete_direction(dpad, Some(Vec2::new(0.0, 1.0)))
//!         .with_digital_key(KeyId(96), true),
//!     InputState::new(),
//! ];
//! let events: Vec<InputEvent> = events_from_states(frames).collect();
//! assert_eq!(events.len(), 4);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod events;
pub mod ids;
pub mod state;
