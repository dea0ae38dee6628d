// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lemuroid Touch: the emulator-side layer over PadKit.
//!
//! ## Overview
//!
//! - [`settings`]: [`TouchControllerSettings`](crate::settings::TouchControllerSettings),
//!   the global sliders and per-button customizations the host persists.
//! - [`edit`]: the normal/edit toggle, customizable controls, and the
//!   pan/pinch gesture that rearranges them.
//! - [`gesture`]: pan and zoom measured between pointer frames.
//! - [`anchors`]: console-specific face-button layouts.
//! - [`error`]: settings validation errors.
//!
//! Storage and rendering stay with the host. Customizations leave this crate
//! through the sink installed on the
//! [`ControlEditContext`](crate::edit::ControlEditContext).
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use lemuroid_touch::edit::{ControlEditContext, CustomizableControl, EditMode};
//! use lemuroid_touch::gesture::PointerChange;
//! use lemuroid_touch::settings::TouchControllerSettings;
//!
//! let settings = TouchControllerSettings::default();
//! let mut context = ControlEditContext::new();
//! context.set_mode(EditMode::Edit);
//! context.set_sink(|button: &str, c| println!("{button}: {c:?}"));
//!
//! let mut start = CustomizableControl::new("start", &settings);
//! let drag = [
//!     vec![PointerChange::moved(0, Point::new(0.0, 0.0), Point::new(20.0, 0.0))],
//!     vec![PointerChange::released(0, Point::new(20.0, 0.0))],
//! ];
//! let committed = start.run_gesture(drag, &mut context).unwrap();
//! assert_eq!(committed.offset, Vec2::new(20.0, 0.0));
//! ```

pub mod anchors;
pub mod edit;
pub mod error;
pub mod gesture;
pub mod settings;
