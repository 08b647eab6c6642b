//! The device set and its current on/off and power-draw state.

use crate::devices::sampler::PowerBand;
use crate::error::DashError;

/// One smart-home device.
///
/// The set is fixed at startup; devices are never added or removed at
/// runtime. `power_kw` is preserved while the device is off so it resumes
/// at its last value when toggled back on.
#[derive(Debug, Clone)]
pub struct Device {
    /// Stable key used by toggles, samples, and display slots.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Opaque icon label shown on the device card.
    pub icon: String,
    /// Whether the device is currently on.
    pub is_on: bool,
    /// Last sampled power draw (kW, >= 0).
    pub power_kw: f32,
    /// Sampling band for the simulation tick; `None` means the device keeps
    /// a fixed draw.
    pub band: Option<PowerBand>,
}

impl Device {
    /// The device's contribution to totals: `power_kw` if on, else 0.
    pub fn effective_kw(&self) -> f32 {
        if self.is_on { self.power_kw } else { 0.0 }
    }
}

/// Ordered registry of all devices.
///
/// Iteration order is declaration order and is relied on by every consumer:
/// it makes rendering deterministic and breaks ranking ties.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    /// Creates a registry from the declared device list.
    pub fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    /// All devices in declaration order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Looks up a device by id.
    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Number of devices in the registry.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Flips the on/off state of the device with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::UnknownDevice`] if no device has that id.
    ///
    /// # Returns
    ///
    /// The new on/off state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, DashError> {
        let device = self.get_mut(id)?;
        device.is_on = !device.is_on;
        Ok(device.is_on)
    }

    /// Stores a new power sample for the device with the given id.
    ///
    /// The value is stored even while the device is off; it only affects
    /// totals once the device is on again.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::UnknownDevice`] for unknown ids and
    /// [`DashError::InvalidValue`] for negative samples.
    pub fn set_power_kw(&mut self, id: &str, value: f32) -> Result<(), DashError> {
        if value < 0.0 {
            return Err(DashError::InvalidValue {
                device: id.to_string(),
                value,
            });
        }
        self.get_mut(id)?.power_kw = value;
        Ok(())
    }

    /// The effective power of the device with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::UnknownDevice`] if no device has that id.
    pub fn effective_kw(&self, id: &str) -> Result<f32, DashError> {
        self.get(id)
            .map(Device::effective_kw)
            .ok_or_else(|| DashError::UnknownDevice(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Device, DashError> {
        self.devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| DashError::UnknownDevice(id.to_string()))
    }
}
