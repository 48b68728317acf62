//! Sensor snapshot: one immutable set of readings per evaluation tick.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Readings taken at a single point in time.
///
/// Values are not range-checked; a negative humidity is passed through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Indoor temperature in °C.
    pub temperature: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    pub smoke: bool,
    pub motion: bool,
}

impl SensorSnapshot {
    #[must_use]
    pub fn new(temperature: f64, humidity: f64, smoke: bool, motion: bool) -> Self {
        Self {
            temperature,
            humidity,
            smoke,
            motion,
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

impl fmt::Display for SensorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temp={:.1}C, Humidity={:.1}%, Smoke={}, Motion={}",
            self.temperature,
            self.humidity,
            yes_no(self.smoke),
            yes_no(self.motion),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_sensor_check_line() {
        let snapshot = SensorSnapshot::new(23.5, 61.24, false, true);
        assert_eq!(
            snapshot.to_string(),
            "Temp=23.5C, Humidity=61.2%, Smoke=No, Motion=Yes"
        );
    }

    #[test]
    fn should_accept_out_of_range_values() {
        let snapshot = SensorSnapshot::new(-80.0, -5.0, true, false);
        assert!(snapshot.humidity < 0.0);
        assert_eq!(
            snapshot.to_string(),
            "Temp=-80.0C, Humidity=-5.0%, Smoke=Yes, Motion=No"
        );
    }
}
