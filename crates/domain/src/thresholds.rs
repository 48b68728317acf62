//! Thresholds: the constants the rules compare readings against.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Target indoor temperature in °C.
pub const IDEAL_TEMP: f64 = 24.0;

/// Relative humidity (%) above which the exhaust fan runs.
pub const HUMIDITY_HIGH: f64 = 55.0;

/// Tolerated distance (°C) from [`IDEAL_TEMP`] before heating or cooling.
pub const COMFORT_BAND: f64 = 1.0;

/// Rule thresholds for one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub ideal_temperature: f64,
    pub humidity_high: f64,
    pub comfort_band: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ideal_temperature: IDEAL_TEMP,
            humidity_high: HUMIDITY_HIGH,
            comfort_band: COMFORT_BAND,
        }
    }
}

impl Thresholds {
    /// Temperatures strictly below this call for heating.
    #[must_use]
    pub fn heat_below(&self) -> f64 {
        self.ideal_temperature - self.comfort_band
    }

    /// Temperatures strictly above this call for ventilation.
    #[must_use]
    pub fn cool_above(&self) -> f64 {
        self.ideal_temperature + self.comfort_band
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteThreshold`] when any field is NaN
    /// or infinite, and [`ValidationError::InvalidComfortBand`] when the band
    /// is negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("ideal_temperature", self.ideal_temperature),
            ("humidity_high", self.humidity_high),
            ("comfort_band", self.comfort_band),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteThreshold { field });
            }
        }
        if self.comfort_band < 0.0 {
            return Err(ValidationError::InvalidComfortBand);
        }
        Ok(())
    }
}
