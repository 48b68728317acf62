//! Common error types used across the workspace.
//!
//! Each failure has its own typed error; [`HomeWardenError`] aggregates them
//! through `#[from]` conversions so callers can use `?` everywhere.

/// Top-level error for every fallible homewarden operation.
#[derive(Debug, thiserror::Error)]
pub enum HomeWardenError {
    /// A domain invariant was violated while building a value.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A device lookup named something the registry does not hold.
    #[error("unknown device")]
    UnknownDevice(#[from] UnknownDeviceError),

    /// A sensor source could not produce a snapshot.
    #[error("sensor error")]
    Sensor(#[from] SensorError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("camera id must not be empty")]
    EmptyCameraId,

    #[error("camera {0:?} is registered more than once")]
    DuplicateCamera(String),

    #[error("comfort band must be a non-negative number")]
    InvalidComfortBand,

    #[error("threshold {field} must be a finite number")]
    NonFiniteThreshold { field: &'static str },
}

/// A device id that is not part of the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {id:?} is not registered")]
pub struct UnknownDeviceError {
    /// Kind of device that was looked up (e.g. `"Camera"`).
    pub kind: &'static str,
    /// The id that failed to resolve.
    pub id: String,
}

/// Failures reported by sensor sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SensorError {
    #[error("sensor source exhausted after {readings} readings")]
    Exhausted { readings: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_unknown_device_into_top_level_error() {
        let err: HomeWardenError = UnknownDeviceError {
            kind: "Camera",
            id: "garage".to_string(),
        }
        .into();
        assert!(matches!(err, HomeWardenError::UnknownDevice(_)));
    }

    #[test]
    fn should_describe_unknown_device() {
        let err = UnknownDeviceError {
            kind: "Camera",
            id: "garage".to_string(),
        };
        assert_eq!(err.to_string(), "Camera \"garage\" is not registered");
    }

    #[test]
    fn should_keep_source_on_top_level_error() {
        let err: HomeWardenError = SensorError::Exhausted { readings: 3 }.into();
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "sensor source exhausted after 3 readings");
    }
}
