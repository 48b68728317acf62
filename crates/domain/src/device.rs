//! Device: a controllable on/off actuator owned by the registry.
//!
//! Devices form a small closed set addressed through [`DeviceKey`]. Cameras
//! are the only open part of the set: they are keyed by [`CameraId`] and
//! carry a [`CameraRole`] that decides how the camera rule treats them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single on/off device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    name: String,
    on: bool,
}

impl Device {
    /// Create a device that starts switched off.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn activate(&mut self) {
        self.on = true;
    }

    pub fn deactivate(&mut self) {
        self.on = false;
    }

    /// Set the flag and return the value it held before.
    pub fn set(&mut self, on: bool) -> bool {
        std::mem::replace(&mut self.on, on)
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Identifier of a camera (`kitchen`, `door`, …).
///
/// Always trimmed and lowercase, never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CameraId(pub(crate) String);

impl CameraId {
    /// Normalise and validate a camera id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCameraId`] when `id` is blank.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ValidationError> {
        let id = id.as_ref().trim().to_lowercase();
        if id.is_empty() {
            return Err(ValidationError::EmptyCameraId);
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id with its first letter capitalised (`kitchen` → `Kitchen`).
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CameraId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CameraId> for String {
    fn from(value: CameraId) -> Self {
        value.0
    }
}

/// How the camera rule treats a camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraRole {
    /// Indoor camera, switched off while someone is present.
    #[default]
    Interior,
    /// Entrance camera, armed whenever motion is detected.
    Perimeter,
}

/// Declaration of a camera used to build a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub id: CameraId,
    #[serde(default)]
    pub role: CameraRole,
}

impl CameraSpec {
    #[must_use]
    pub fn new(id: CameraId, role: CameraRole) -> Self {
        Self { id, role }
    }
}

/// A registered camera and its on/off state.
///
/// Identity and role are fixed once the camera is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    id: CameraId,
    role: CameraRole,
    device: Device,
}

impl Camera {
    #[must_use]
    pub fn new(declared: CameraSpec) -> Self {
        let device = Device::new(format!("{} Camera", declared.id.display_name()));
        Self {
            id: declared.id,
            role: declared.role,
            device,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CameraId {
        &self.id
    }

    #[must_use]
    pub fn role(&self) -> CameraRole {
        self.role
    }

    #[must_use]
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// The camera's identity alongside its switchable device.
    pub(crate) fn parts_mut(&mut self) -> (&CameraId, CameraRole, &mut Device) {
        (&self.id, self.role, &mut self.device)
    }
}

/// Address of any device held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceKey {
    Heater,
    WindowPanels,
    ExhaustFan,
    SmokeAlarm,
    Camera(CameraId),
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heater => f.write_str("Heater"),
            Self::WindowPanels => f.write_str("Window Panels"),
            Self::ExhaustFan => f.write_str("Exhaust Fan"),
            Self::SmokeAlarm => f.write_str("Smoke Alarm"),
            Self::Camera(id) => write!(f, "{} Camera", id.display_name()),
        }
    }
}

/// Parses the snake-case names used by the manual-override surface.
///
/// Anything that is not one of the fixed devices is read as a camera id,
/// with or without a `camera:` prefix or a `camera` suffix, so the status
/// board label `Kitchen Camera` parses too. Whether that camera exists is
/// the registry's concern.
impl FromStr for DeviceKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace([' ', '-'], "_");
        match name.as_str() {
            "heater" => Ok(Self::Heater),
            "window_panels" | "windows" => Ok(Self::WindowPanels),
            "exhaust_fan" | "exhaust" | "fan" => Ok(Self::ExhaustFan),
            "smoke_alarm" | "alarm" => Ok(Self::SmokeAlarm),
            other => {
                let id = other.strip_prefix("camera:").unwrap_or(other);
                let id = id.strip_suffix("_camera").unwrap_or(id);
                CameraId::new(id).map(Self::Camera)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_switched_off() {
        let device = Device::new("Heater");
        assert!(!device.is_on());
    }

    #[test]
    fn should_return_previous_value_when_set() {
        let mut device = Device::new("Heater");
        assert!(!device.set(true));
        assert!(device.set(true));
        assert!(device.is_on());
    }

    #[test]
    fn should_normalise_camera_id() {
        let id = CameraId::new("  Kitchen ").unwrap();
        assert_eq!(id.as_str(), "kitchen");
        assert_eq!(id.display_name(), "Kitchen");
    }

    #[test]
    fn should_reject_blank_camera_id() {
        assert_eq!(CameraId::new("   "), Err(ValidationError::EmptyCameraId));
    }

    #[test]
    fn should_name_camera_device_after_its_id() {
        let camera = Camera::new(CameraSpec::new(
            CameraId::new("hallway").unwrap(),
            CameraRole::Interior,
        ));
        assert_eq!(camera.device().name(), "Hallway Camera");
    }

    #[test]
    fn should_parse_fixed_device_names() {
        assert_eq!("heater".parse::<DeviceKey>(), Ok(DeviceKey::Heater));
        assert_eq!(
            "window_panels".parse::<DeviceKey>(),
            Ok(DeviceKey::WindowPanels)
        );
        assert_eq!(
            "Exhaust Fan".parse::<DeviceKey>(),
            Ok(DeviceKey::ExhaustFan)
        );
        assert_eq!(
            "smoke-alarm".parse::<DeviceKey>(),
            Ok(DeviceKey::SmokeAlarm)
        );
    }

    #[test]
    fn should_parse_camera_with_and_without_prefix() {
        let door = DeviceKey::Camera(CameraId::new("door").unwrap());
        assert_eq!("door".parse::<DeviceKey>(), Ok(door.clone()));
        assert_eq!("camera:door".parse::<DeviceKey>(), Ok(door));
    }

    #[test]
    fn should_parse_status_board_camera_label() {
        let kitchen = DeviceKey::Camera(CameraId::new("kitchen").unwrap());
        assert_eq!("Kitchen Camera".parse::<DeviceKey>(), Ok(kitchen.clone()));
        assert_eq!("kitchen_camera".parse::<DeviceKey>(), Ok(kitchen.clone()));
        assert_eq!(kitchen.to_string().parse::<DeviceKey>(), Ok(kitchen));
    }

    #[test]
    fn should_display_human_labels() {
        assert_eq!(DeviceKey::WindowPanels.to_string(), "Window Panels");
        let kitchen = DeviceKey::Camera(CameraId::new("kitchen").unwrap());
        assert_eq!(kitchen.to_string(), "Kitchen Camera");
    }

    #[test]
    fn should_deserialize_camera_spec_with_default_role() {
        let declared: CameraSpec = serde_json::from_str(r#"{"id":"Garage"}"#).unwrap();
        assert_eq!(declared.id.as_str(), "garage");
        assert_eq!(declared.role, CameraRole::Interior);
    }

    #[test]
    fn should_reject_empty_camera_id_when_deserializing() {
        let result: Result<CameraSpec, _> = serde_json::from_str(r#"{"id":""}"#);
        assert!(result.is_err());
    }
}
