// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit mode: repositioning and resizing controls with gestures.
//!
//! ## Overview
//!
//! A screen owns one [`ControlEditContext`] and passes it to every
//! [`CustomizableControl`] it shows. The context holds the normal/edit
//! toggle and the sink that persists customizations.
//!
//! In normal mode a control is placed by the customization stored in the
//! settings. In edit mode it is placed by its local, live copy, which an
//! [`EditGesture`] updates frame by frame:
//!
//! - one finger pans,
//! - two or more fingers pan and pinch.
//!
//! Scale stays within [`MIN_EDIT_SCALE`] and [`MAX_EDIT_SCALE`]. When a
//! gesture that changed something ends, the result goes to the sink once.
//!
//! ## Teardown
//!
//! Call [`ControlEditContext::reset`] when the hosting screen goes away; it
//! returns to normal mode and drops the sink.

use kurbo::Vec2;
use tracing::debug;

use crate::gesture::{PointerChange, calculate_pan, calculate_zoom};
use crate::settings::{ButtonCustomization, TouchControllerSettings};

/// Smallest per-button scale reachable by pinching.
pub const MIN_EDIT_SCALE: f64 = 0.5;
/// Largest per-button scale reachable by pinching.
pub const MAX_EDIT_SCALE: f64 = 2.5;
/// Zoom ratios closer to 1 than this are treated as no pinch.
pub const PINCH_THRESHOLD: f64 = 0.01;

/// Whether controls play or get rearranged.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum EditMode {
    /// Controls produce input.
    #[default]
    Normal,
    /// Controls follow edit gestures.
    Edit,
}

type CustomizationSink = Box<dyn FnMut(&str, ButtonCustomization)>;

/// Screen-wide edit state shared by all customizable controls.
#[derive(Default)]
pub struct ControlEditContext {
    mode: EditMode,
    sink: Option<CustomizationSink>,
}

impl core::fmt::Debug for ControlEditContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControlEditContext")
            .field("mode", &self.mode)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl ControlEditContext {
    /// A context in normal mode without a sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Returns true in [`EditMode::Edit`].
    pub fn is_edit_mode(&self) -> bool {
        self.mode == EditMode::Edit
    }

    /// Switch mode.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            debug!(?mode, "edit mode changed");
        }
        self.mode = mode;
    }

    /// Install the function that persists customizations.
    pub fn set_sink(&mut self, sink: impl FnMut(&str, ButtonCustomization) + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Remove the sink; later commits are dropped.
    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    /// Deliver a customization to the sink, if any.
    pub fn notify(&mut self, button_id: &str, customization: ButtonCustomization) {
        match &mut self.sink {
            Some(sink) => {
                debug!(button = button_id, ?customization, "customization committed");
                sink(button_id, customization);
            }
            None => debug!(button = button_id, "no customization sink"),
        }
    }

    /// Back to normal mode with no sink.
    pub fn reset(&mut self) {
        self.set_mode(EditMode::Normal);
        self.sink = None;
    }
}

/// Where and how big a control is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlTransform {
    /// Translation in pixels.
    pub offset: Vec2,
    /// Total scale, global factor included.
    pub scale: f64,
}

/// A control that can be moved and resized in edit mode.
#[derive(Clone, Debug)]
pub struct CustomizableControl {
    button_id: String,
    apply_global_scale: bool,
    local: ButtonCustomization,
}

impl CustomizableControl {
    /// Wrap the control named `button_id`, starting from its stored
    /// customization.
    pub fn new(button_id: impl Into<String>, settings: &TouchControllerSettings) -> Self {
        let button_id = button_id.into();
        let local = editable(settings.customization(&button_id));
        Self {
            button_id,
            apply_global_scale: true,
            local,
        }
    }

    /// Whether the settings' global scale multiplies this control's scale.
    #[must_use]
    pub fn with_global_scale(mut self, apply: bool) -> Self {
        self.apply_global_scale = apply;
        self
    }

    /// Name of the control.
    pub fn button_id(&self) -> &str {
        &self.button_id
    }

    /// The live customization edited by gestures.
    pub fn local(&self) -> ButtonCustomization {
        self.local
    }

    /// Reload the live customization after the settings changed.
    pub fn sync_from_settings(&mut self, settings: &TouchControllerSettings) {
        self.local = editable(settings.customization(&self.button_id));
    }

    /// Transform to draw the control with.
    pub fn transform(
        &self,
        settings: &TouchControllerSettings,
        context: &ControlEditContext,
    ) -> ControlTransform {
        let global = if self.apply_global_scale {
            settings.global_scale_factor()
        } else {
            1.0
        };
        let base = if context.is_edit_mode() {
            self.local
        } else {
            settings.customization(&self.button_id)
        };
        ControlTransform {
            offset: base.offset,
            scale: base.scale * global,
        }
    }

    /// Start a gesture. Returns `None` outside edit mode.
    pub fn begin_gesture(&mut self, context: &ControlEditContext) -> Option<EditGesture<'_>> {
        context.is_edit_mode().then_some(EditGesture {
            control: self,
            dirty: false,
        })
    }

    /// Run a whole gesture over `frames`.
    ///
    /// Frames are consumed up to and including the first one where no
    /// pointer is pressed. Returns the committed customization, if the
    /// gesture changed anything.
    pub fn run_gesture<I, F>(
        &mut self,
        frames: I,
        context: &mut ControlEditContext,
    ) -> Option<ButtonCustomization>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[PointerChange]>,
    {
        let mut gesture = self.begin_gesture(context)?;
        for frame in frames {
            if !gesture.update(frame.as_ref()) {
                break;
            }
        }
        gesture.finish(context)
    }
}

/// A stored customization with its scale brought into the editable range.
fn editable(mut customization: ButtonCustomization) -> ButtonCustomization {
    customization.scale = customization.scale.clamp(MIN_EDIT_SCALE, MAX_EDIT_SCALE);
    customization
}

/// An in-progress edit gesture on one control.
#[derive(Debug)]
pub struct EditGesture<'a> {
    control: &'a mut CustomizableControl,
    dirty: bool,
}

impl EditGesture<'_> {
    /// Apply one frame. Returns whether any pointer is still pressed.
    pub fn update(&mut self, changes: &[PointerChange]) -> bool {
        let local = &mut self.control.local;
        let pan = calculate_pan(changes);
        if changes.len() >= 2 {
            let zoom = calculate_zoom(changes);
            if zoom != 1.0 || pan != Vec2::ZERO {
                local.offset += pan;
                if (zoom - 1.0).abs() > PINCH_THRESHOLD {
                    local.scale *= zoom;
                }
                self.dirty = true;
            }
        } else if changes.len() == 1 && pan != Vec2::ZERO {
            local.offset += pan;
            self.dirty = true;
        }
        local.scale = local.scale.clamp(MIN_EDIT_SCALE, MAX_EDIT_SCALE);
        changes.iter().any(|c| c.pressed)
    }

    /// Whether this gesture changed the control.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// End the gesture, sending the result to the context's sink if dirty.
    pub fn finish(self, context: &mut ControlEditContext) -> Option<ButtonCustomization> {
        if !self.dirty {
            return None;
        }
        let customization = self.control.local;
        context.notify(&self.control.button_id, customization);
        Some(customization)
    }
}
