// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settings validation errors.

use thiserror::Error;

/// A value in [`TouchControllerSettings`](crate::settings::TouchControllerSettings)
/// that the controls cannot use.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SettingsError {
    /// A global slider value outside `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    FractionOutOfRange {
        /// Name of the setting.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A per-button scale outside the range the edit overlay allows.
    #[error("scale of button {button:?} must be within [{min}, {max}], got {value}")]
    CustomizationScaleOutOfRange {
        /// Button whose customization is invalid.
        button: String,
        /// Offending value.
        value: f64,
        /// Smallest allowed scale.
        min: f64,
        /// Largest allowed scale.
        max: f64,
    },

    /// A NaN or infinite value.
    #[error("{field} is not finite")]
    NonFinite {
        /// Name of the setting, qualified with the button id for customizations.
        field: String,
    },
}
