//! Sensor source implementations: simulated and scripted.

mod scripted;
mod simulated;

pub use scripted::ScriptedSensors;
pub use simulated::SimulatedSensors;
