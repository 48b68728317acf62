//! Sensor source port: where snapshots come from.
//!
//! Implementations live in adapter crates (simulated, scripted, or one day a
//! real sensor bus). The controller calls [`SensorSource::read`] once per
//! polling tick; timing is the caller's concern.

use std::future::Future;

use homewarden_domain::error::HomeWardenError;
use homewarden_domain::sensor::SensorSnapshot;

/// Produces one [`SensorSnapshot`] per call.
pub trait SensorSource {
    /// Take a fresh set of readings.
    fn read(&mut self) -> impl Future<Output = Result<SensorSnapshot, HomeWardenError>> + Send;
}
