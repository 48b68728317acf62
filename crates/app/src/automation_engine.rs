//! Automation engine: turns one sensor snapshot into the next device states.
//!
//! The engine is a synchronous, deterministic function of the snapshot and
//! the registry state before the call. It never looks at earlier readings:
//! the previous device state is only consulted to decide whether a
//! transition deserves a narration line.
//!
//! Rules run in a fixed order so the narration is reproducible:
//!
//! 1. smoke
//! 2. humidity
//! 3. temperature, gated by motion
//! 4. motion presence
//! 5. cameras

use homewarden_domain::device::CameraRole;
use homewarden_domain::evaluation::EvaluationResult;
use homewarden_domain::registry::DeviceRegistry;
use homewarden_domain::sensor::SensorSnapshot;
use homewarden_domain::thresholds::Thresholds;

const SMOKE_DETECTED: &str = "Smoke detected! Activating smoke alarm.";
const FAN_ON: &str = "Exhaust fan activated due to high humidity.";
const FAN_OFF: &str = "Exhaust fan deactivated.";
const HEATER_OFF: &str = "Heater OFF - temperature within range.";
const PANELS_CLOSED: &str = "Window panels CLOSED - temperature within range.";
const NO_MOTION: &str = "No motion detected: turning off temp-control devices.";
const MOTION_PRESENT: &str = "Motion detected: Someone is present.";
const CAMERAS_HEADER: &str = "Managing indoor cameras.";

/// Rule engine for a single zone.
#[derive(Debug, Clone, Default)]
pub struct AutomationEngine {
    thresholds: Thresholds,
}

impl AutomationEngine {
    /// Create an engine with the given thresholds.
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Apply every rule to `registry` and report the resulting state.
    ///
    /// The registry is mutated in place; the returned result mirrors the
    /// registry after the call. Manual changes made to the registry between
    /// two calls are overridden whenever a rule applies to that device.
    pub fn evaluate(
        &self,
        snapshot: SensorSnapshot,
        registry: &mut DeviceRegistry,
    ) -> EvaluationResult {
        let mut logs = Vec::new();

        apply_smoke_rule(snapshot, registry, &mut logs);
        self.apply_humidity_rule(snapshot, registry, &mut logs);
        self.apply_climate_rule(snapshot, registry, &mut logs);
        if snapshot.motion {
            logs.push(MOTION_PRESENT.to_string());
        }
        apply_camera_rule(snapshot, registry, &mut logs);

        let result = EvaluationResult {
            heater_on: registry.heater().is_on(),
            window_panels_on: registry.window_panels().is_on(),
            exhaust_fan_on: registry.exhaust_fan().is_on(),
            smoke_alarm_on: registry.smoke_alarm().is_on(),
            smoke_alert: snapshot.smoke,
            motion_detected: snapshot.motion,
            camera_states: registry.camera_states(),
            logs,
        };

        tracing::debug!(
            temperature = snapshot.temperature,
            humidity = snapshot.humidity,
            smoke = snapshot.smoke,
            motion = snapshot.motion,
            heater = result.heater_on,
            window_panels = result.window_panels_on,
            exhaust_fan = result.exhaust_fan_on,
            lines = result.logs.len(),
            "evaluated sensor snapshot"
        );

        result
    }

    fn apply_humidity_rule(
        &self,
        snapshot: SensorSnapshot,
        registry: &mut DeviceRegistry,
        logs: &mut Vec<String>,
    ) {
        let wanted = snapshot.humidity > self.thresholds.humidity_high;
        let was_on = registry.exhaust_fan_mut().set(wanted);
        match (was_on, wanted) {
            (false, true) => logs.push(FAN_ON.to_string()),
            (true, false) => logs.push(FAN_OFF.to_string()),
            _ => {}
        }
    }

    fn apply_climate_rule(
        &self,
        snapshot: SensorSnapshot,
        registry: &mut DeviceRegistry,
        logs: &mut Vec<String>,
    ) {
        let heater_was_on = registry.heater().is_on();
        let panels_were_on = registry.window_panels().is_on();
        let ideal = self.thresholds.ideal_temperature;

        let (heater, panels) = if !snapshot.motion {
            if heater_was_on || panels_were_on {
                logs.push(NO_MOTION.to_string());
            }
            (false, false)
        } else if snapshot.temperature < self.thresholds.heat_below() {
            if !heater_was_on {
                logs.push(format!("Heater ON to reach ideal temperature ({ideal}°C)."));
            }
            (true, false)
        } else if snapshot.temperature > self.thresholds.cool_above() {
            if !panels_were_on {
                logs.push(format!("Window panels OPEN to reduce temperature to {ideal}°C."));
            }
            (false, true)
        } else {
            if heater_was_on {
                logs.push(HEATER_OFF.to_string());
            }
            if panels_were_on {
                logs.push(PANELS_CLOSED.to_string());
            }
            (false, false)
        };

        registry.heater_mut().set(heater);
        registry.window_panels_mut().set(panels);
    }
}

// Logs on every call while smoke persists, unlike the edge-triggered rules.
fn apply_smoke_rule(
    snapshot: SensorSnapshot,
    registry: &mut DeviceRegistry,
    logs: &mut Vec<String>,
) {
    if snapshot.smoke {
        registry.smoke_alarm_mut().activate();
        logs.push(SMOKE_DETECTED.to_string());
    } else {
        registry.smoke_alarm_mut().deactivate();
    }
}

/// Privacy mode while someone is present, security mode otherwise.
fn apply_camera_rule(
    snapshot: SensorSnapshot,
    registry: &mut DeviceRegistry,
    logs: &mut Vec<String>,
) {
    logs.push(CAMERAS_HEADER.to_string());

    if !snapshot.motion {
        for (id, _, device) in registry.camera_devices_mut() {
            if !device.set(true) {
                logs.push(format!(
                    "{} camera ON (no motion - security mode).",
                    id.display_name()
                ));
            }
        }
        return;
    }

    for (id, _, device) in registry
        .camera_devices_mut()
        .filter(|(_, role, _)| *role == CameraRole::Interior)
    {
        if device.set(false) {
            logs.push(format!(
                "{} camera OFF (privacy - motion detected).",
                id.display_name()
            ));
        }
    }
    for (id, _, device) in registry
        .camera_devices_mut()
        .filter(|(_, role, _)| *role == CameraRole::Perimeter)
    {
        if !device.set(true) {
            logs.push(format!("{} camera ON (motion detected).", id.display_name()));
        }
    }
}
