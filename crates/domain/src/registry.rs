//! Device Registry: the on/off state of every device in one zone.
//!
//! The registry is created once per zone and never gains or loses devices
//! afterwards. Cameras keep their declaration order, which is the order the
//! camera rule narrates them in.

use std::collections::{BTreeMap, HashSet};

use crate::device::{Camera, CameraId, CameraRole, CameraSpec, Device, DeviceKey};
use crate::error::{HomeWardenError, UnknownDeviceError, ValidationError};

/// The household's cameras when none are configured.
#[must_use]
pub fn default_cameras() -> Vec<CameraSpec> {
    [
        ("kitchen", CameraRole::Interior),
        ("bedroom", CameraRole::Interior),
        ("hallway", CameraRole::Interior),
        ("door", CameraRole::Perimeter),
    ]
    .into_iter()
    .map(|(id, role)| CameraSpec::new(CameraId(id.to_string()), role))
    .collect()
}

/// Owner of every device of a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRegistry {
    heater: Device,
    window_panels: Device,
    exhaust_fan: Device,
    smoke_alarm: Device,
    cameras: Vec<Camera>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::from_valid_cameras(default_cameras())
    }
}

impl DeviceRegistry {
    /// Build a registry with a custom camera set.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::Validation`] with
    /// [`ValidationError::DuplicateCamera`] when two cameras share an id.
    pub fn with_cameras(
        cameras: impl IntoIterator<Item = CameraSpec>,
    ) -> Result<Self, HomeWardenError> {
        let cameras: Vec<CameraSpec> = cameras.into_iter().collect();
        let mut seen = HashSet::new();
        for declared in &cameras {
            if !seen.insert(&declared.id) {
                return Err(ValidationError::DuplicateCamera(declared.id.to_string()).into());
            }
        }
        Ok(Self::from_valid_cameras(cameras))
    }

    fn from_valid_cameras(cameras: Vec<CameraSpec>) -> Self {
        Self {
            heater: Device::new("Heater"),
            window_panels: Device::new("Window Panels"),
            exhaust_fan: Device::new("Exhaust Fan"),
            smoke_alarm: Device::new("Smoke Alarm"),
            cameras: cameras.into_iter().map(Camera::new).collect(),
        }
    }

    #[must_use]
    pub fn heater(&self) -> &Device {
        &self.heater
    }

    pub fn heater_mut(&mut self) -> &mut Device {
        &mut self.heater
    }

    #[must_use]
    pub fn window_panels(&self) -> &Device {
        &self.window_panels
    }

    pub fn window_panels_mut(&mut self) -> &mut Device {
        &mut self.window_panels
    }

    #[must_use]
    pub fn exhaust_fan(&self) -> &Device {
        &self.exhaust_fan
    }

    pub fn exhaust_fan_mut(&mut self) -> &mut Device {
        &mut self.exhaust_fan
    }

    #[must_use]
    pub fn smoke_alarm(&self) -> &Device {
        &self.smoke_alarm
    }

    pub fn smoke_alarm_mut(&mut self) -> &mut Device {
        &mut self.smoke_alarm
    }

    /// Cameras in declaration order.
    #[must_use]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Every camera's id and role next to its switchable device, in
    /// declaration order. Ids and roles stay read-only.
    pub fn camera_devices_mut(
        &mut self,
    ) -> impl Iterator<Item = (&CameraId, CameraRole, &mut Device)> {
        self.cameras.iter_mut().map(Camera::parts_mut)
    }

    /// Resolve any device key.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] for a camera id that is
    /// not registered.
    pub fn device(&self, key: &DeviceKey) -> Result<&Device, HomeWardenError> {
        match key {
            DeviceKey::Heater => Ok(&self.heater),
            DeviceKey::WindowPanels => Ok(&self.window_panels),
            DeviceKey::ExhaustFan => Ok(&self.exhaust_fan),
            DeviceKey::SmokeAlarm => Ok(&self.smoke_alarm),
            DeviceKey::Camera(id) => self
                .cameras
                .iter()
                .find(|camera| camera.id() == id)
                .map(Camera::device)
                .ok_or_else(|| unknown_camera(id)),
        }
    }

    /// Resolve any device key for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] for a camera id that is
    /// not registered.
    pub fn device_mut(&mut self, key: &DeviceKey) -> Result<&mut Device, HomeWardenError> {
        match key {
            DeviceKey::Heater => Ok(&mut self.heater),
            DeviceKey::WindowPanels => Ok(&mut self.window_panels),
            DeviceKey::ExhaustFan => Ok(&mut self.exhaust_fan),
            DeviceKey::SmokeAlarm => Ok(&mut self.smoke_alarm),
            DeviceKey::Camera(id) => self
                .cameras
                .iter_mut()
                .map(Camera::parts_mut)
                .find(|(camera_id, _, _)| *camera_id == id)
                .map(|(_, _, device)| device)
                .ok_or_else(|| unknown_camera(id)),
        }
    }

    /// Switch a device on.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] if `key` is not registered.
    pub fn activate(&mut self, key: &DeviceKey) -> Result<(), HomeWardenError> {
        self.device_mut(key)?.activate();
        Ok(())
    }

    /// Switch a device off.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] if `key` is not registered.
    pub fn deactivate(&mut self, key: &DeviceKey) -> Result<(), HomeWardenError> {
        self.device_mut(key)?.deactivate();
        Ok(())
    }

    /// Force a device into `on` and return the state it held before.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] if `key` is not registered.
    pub fn set(&mut self, key: &DeviceKey, on: bool) -> Result<bool, HomeWardenError> {
        Ok(self.device_mut(key)?.set(on))
    }

    /// Flip a device and return its new state.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] if `key` is not registered.
    pub fn toggle(&mut self, key: &DeviceKey) -> Result<bool, HomeWardenError> {
        let device = self.device_mut(key)?;
        let on = !device.is_on();
        device.set(on);
        Ok(on)
    }

    /// Current state of a device.
    ///
    /// # Errors
    ///
    /// Returns [`HomeWardenError::UnknownDevice`] if `key` is not registered.
    pub fn is_on(&self, key: &DeviceKey) -> Result<bool, HomeWardenError> {
        Ok(self.device(key)?.is_on())
    }

    /// Every camera's state, ordered by id.
    #[must_use]
    pub fn camera_states(&self) -> BTreeMap<CameraId, bool> {
        self.cameras
            .iter()
            .map(|camera| (camera.id().clone(), camera.device().is_on()))
            .collect()
    }
}

fn unknown_camera(id: &CameraId) -> HomeWardenError {
    UnknownDeviceError {
        kind: "Camera",
        id: id.to_string(),
    }
    .into()
}
