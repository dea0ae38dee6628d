// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-controller settings as persisted by the host.
//!
//! Global values are stored as slider fractions in `[0, 1]` and mapped to
//! their real ranges by the accessors. Per-button customizations are keyed
//! by the button's layout name (`"A"`, `"cross"`, `"start"`, ...).

use std::collections::BTreeMap;

use kurbo::Vec2;

use crate::edit::{MAX_EDIT_SCALE, MIN_EDIT_SCALE};
use crate::error::SettingsError;

/// Offset and scale applied to one control on top of the base layout.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonCustomization {
    /// Translation in screen pixels.
    pub offset: Vec2,
    /// Scale relative to the layout size.
    pub scale: f64,
}

impl Default for ButtonCustomization {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Settings of the on-screen controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TouchControllerSettings {
    /// Global size slider; see [`TouchControllerSettings::global_scale_factor`].
    pub scale: f64,
    /// Rotation slider; see [`TouchControllerSettings::rotation_deg`].
    pub rotation: f64,
    /// Horizontal margin slider; see [`TouchControllerSettings::margins`].
    pub margin_x: f64,
    /// Vertical margin slider; see [`TouchControllerSettings::margins`].
    pub margin_y: f64,
    /// Opacity of the controls, `0` transparent to `1` opaque.
    pub opacity: f64,
    /// Per-button overrides keyed by button name.
    pub per_button_customization: BTreeMap<String, ButtonCustomization>,
}

impl Default for TouchControllerSettings {
    fn default() -> Self {
        Self {
            scale: 0.5,
            rotation: 0.0,
            margin_x: 0.0,
            margin_y: 0.0,
            opacity: 1.0,
            per_button_customization: BTreeMap::new(),
        }
    }
}

impl TouchControllerSettings {
    /// Global scale at slider position 0.
    pub const MIN_SCALE: f64 = 0.75;
    /// Global scale at slider position 1.
    pub const MAX_SCALE: f64 = 1.5;
    /// Rotation, in degrees, at slider position 1.
    pub const MAX_ROTATION_DEG: f64 = 45.0;
    /// Margin, in pixels, at slider position 1.
    pub const MAX_MARGINS: f64 = 96.0;

    /// Scale applied to every control, interpolated between
    /// [`Self::MIN_SCALE`] and [`Self::MAX_SCALE`].
    pub fn global_scale_factor(&self) -> f64 {
        Self::MIN_SCALE + (Self::MAX_SCALE - Self::MIN_SCALE) * self.scale
    }

    /// Rotation of the radial layouts in degrees.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation * Self::MAX_ROTATION_DEG
    }

    /// Margins from the screen edges in pixels.
    pub fn margins(&self) -> Vec2 {
        Vec2::new(self.margin_x, self.margin_y) * Self::MAX_MARGINS
    }

    /// Customization of `button_id`, or the identity when none is stored.
    pub fn customization(&self, button_id: &str) -> ButtonCustomization {
        self.per_button_customization
            .get(button_id)
            .copied()
            .unwrap_or_default()
    }

    /// Store the customization of `button_id`.
    pub fn set_customization(
        &mut self,
        button_id: impl Into<String>,
        customization: ButtonCustomization,
    ) {
        self.per_button_customization.insert(button_id.into(), customization);
    }

    /// Drop every per-button customization.
    pub fn reset_customizations(&mut self) {
        self.per_button_customization.clear();
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("scale", self.scale),
            ("rotation", self.rotation),
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
            ("opacity", self.opacity),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite {
                    field: field.to_owned(),
                });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::FractionOutOfRange { field, value });
            }
        }
        for (button, c) in &self.per_button_customization {
            if !c.offset.is_finite() || !c.scale.is_finite() {
                return Err(SettingsError::NonFinite {
                    field: format!("per_button_customization[{button:?}]"),
                });
            }
            if !(MIN_EDIT_SCALE..=MAX_EDIT_SCALE).contains(&c.scale) {
                return Err(SettingsError::CustomizationScaleOutOfRange {
                    button: button.clone(),
                    value: c.scale,
                    min: MIN_EDIT_SCALE,
                    max: MAX_EDIT_SCALE,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliders_map_to_ranges() {
        let mut s = TouchControllerSettings::default();
        s.scale = 0.0;
        assert_eq!(s.global_scale_factor(), TouchControllerSettings::MIN_SCALE);
        s.scale = 1.0;
        assert_eq!(s.global_scale_factor(), TouchControllerSettings::MAX_SCALE);
        s.rotation = 0.5;
        assert_eq!(s.rotation_deg(), 22.5);
        s.margin_x = 1.0;
        assert_eq!(s.margins(), Vec2::new(96.0, 0.0));
    }

    #[test]
    fn missing_customization_is_identity() {
        let mut s = TouchControllerSettings::default();
        assert_eq!(s.customization("A"), ButtonCustomization::default());
        let c = ButtonCustomization {
            offset: Vec2::new(12.0, -4.0),
            scale: 1.25,
        };
        s.set_customization("A", c);
        assert_eq!(s.customization("A"), c);
        s.reset_customizations();
        assert_eq!(s.customization("A"), ButtonCustomization::default());
    }

    #[test]
    fn validate_reports_the_first_problem() {
        assert_eq!(TouchControllerSettings::default().validate(), Ok(()));

        let s = TouchControllerSettings {
            opacity: 1.5,
            ..Default::default()
        };
        assert_eq!(
            s.validate(),
            Err(SettingsError::FractionOutOfRange {
                field: "opacity",
                value: 1.5
            })
        );

        let s = TouchControllerSettings {
            rotation: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            s.validate(),
            Err(SettingsError::NonFinite { field }) if field == "rotation"
        ));

        let mut s = TouchControllerSettings::default();
        s.set_customization(
            "start",
            ButtonCustomization {
                offset: Vec2::ZERO,
                scale: 3.0,
            },
        );
        let err = s.validate().unwrap_err();
        assert!(matches!(
            err,
            SettingsError::CustomizationScaleOutOfRange { ref button, .. } if button == "start"
        ));
        assert_eq!(
            err.to_string(),
            "scale of button \"start\" must be within [0.5, 2.5], got 3"
        );
    }
}
