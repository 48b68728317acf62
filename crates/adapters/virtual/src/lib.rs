//! # homewarden-adapter-virtual
//!
//! Virtual sensor sources for demonstration and testing. Both implement the
//! [`SensorSource`](homewarden_app::ports::SensorSource) port.
//!
//! ## Provided sources
//!
//! | Source | Behaviour |
//! |--------|-----------|
//! | [`SimulatedSensors`] | Random readings: 18–30 °C, 40–80 %, smoke 1 in 3, motion 1 in 4 |
//! | [`ScriptedSensors`] | Replays a fixed list of snapshots, optionally looping |
//!
//! ## Dependency rule
//!
//! Depends on `homewarden-app` (port traits) and `homewarden-domain` only.

mod sensors;

pub use sensors::{ScriptedSensors, SimulatedSensors};
