// Copyright 2025 the PadKit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuning parameters shared by the dispatch scope and the handlers.

use core::time::Duration;

/// Engine configuration.
///
/// The defaults are what the stock controls use; hosts only need to touch
/// this when they want a different feel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PadConfig {
    /// Maximum time between two touches of an analog stick for the second
    /// one to count as a stick click.
    pub double_tap_interval: Duration,
    /// Squared local distance below which a d-pad reports neutral.
    pub dead_zone_squared: f64,
    /// Squared local distance within which an untracked pointer is accepted
    /// by the control whose bounds contain it.
    pub local_radius_squared: f64,
}

impl PadConfig {
    /// Analog double-tap window.
    pub const DEFAULT_DOUBLE_TAP_INTERVAL: Duration = Duration::from_millis(300);
    /// D-pad dead zone, squared.
    pub const DEFAULT_DEAD_ZONE_SQUARED: f64 = 0.025;

    /// Override the analog double-tap window.
    #[must_use]
    pub fn with_double_tap_interval(mut self, interval: Duration) -> Self {
        self.double_tap_interval = interval;
        self
    }

    /// Override the d-pad dead zone (squared local distance).
    #[must_use]
    pub fn with_dead_zone_squared(mut self, dead_zone_squared: f64) -> Self {
        self.dead_zone_squared = dead_zone_squared;
        self
    }
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            double_tap_interval: Self::DEFAULT_DOUBLE_TAP_INTERVAL,
            dead_zone_squared: Self::DEFAULT_DEAD_ZONE_SQUARED,
            local_radius_squared: 1.0,
        }
    }
}
