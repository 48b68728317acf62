//! Evaluation result: the device states and narration of one engine run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::device::CameraId;

/// Output of a single evaluation.
///
/// Device fields reflect the registry *after* the rules ran. `logs` narrates
/// transitions in rule order and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub heater_on: bool,
    pub window_panels_on: bool,
    pub exhaust_fan_on: bool,
    pub smoke_alarm_on: bool,
    /// Echo of the snapshot's smoke reading.
    pub smoke_alert: bool,
    /// Echo of the snapshot's motion reading.
    pub motion_detected: bool,
    pub camera_states: BTreeMap<CameraId, bool>,
    pub logs: Vec<String>,
}

impl EvaluationResult {
    /// State of a single camera, `None` if it is not part of the result.
    #[must_use]
    pub fn camera(&self, id: &str) -> Option<bool> {
        self.camera_states
            .iter()
            .find(|(camera, _)| camera.as_str() == id)
            .map(|(_, on)| *on)
    }
}
