//! TOML-based dashboard configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::devices::{Device, DeviceRegistry, PowerBand};
use crate::series::{HOURS_PER_DAY, PowerSample, PowerSeriesStore};

/// Top-level dashboard configuration parsed from TOML.
///
/// Load from TOML with [`DashboardConfig::from_toml_file`] or use
/// [`DashboardConfig::demo`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Simulation timing and seeding.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// The device set, in declaration (display and tie-break) order.
    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
    /// Optional overrides for the built-in consumption series.
    #[serde(default)]
    pub series: SeriesConfig,
}

/// Simulation timing and seeding.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Master random seed for power sampling.
    pub seed: u64,
    /// Simulation tick cadence in seconds (must be > 0).
    pub tick_interval_secs: u64,
    /// Number of ticks a headless run executes (must be > 0).
    pub ticks: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_interval_secs: 3,
            ticks: 10,
        }
    }
}

/// One device declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Stable device id (unique, non-empty).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Icon label for the device card.
    #[serde(default)]
    pub icon: String,
    /// Initial power draw (kW, >= 0).
    pub power_kw: f32,
    /// Initial on/off state.
    #[serde(default = "default_on")]
    pub on: bool,
    /// Optional tick-time sampling band.
    #[serde(default)]
    pub band: Option<BandConfig>,
}

fn default_on() -> bool {
    true
}

/// Power-draw band a device resamples within on each tick.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandConfig {
    /// Lower bound (kW, >= 0).
    pub min_kw: f32,
    /// Upper bound (kW, >= `min_kw`).
    pub max_kw: f32,
}

/// Optional overrides for the built-in series fixture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Weekly series override (label/kwh pairs, chronological).
    pub weekly: Option<Vec<SampleConfig>>,
    /// Monthly series override (label/kwh pairs, chronological).
    pub monthly: Option<Vec<SampleConfig>>,
    /// Hourly series override (exactly 24 kWh values).
    pub hourly: Option<Vec<f32>>,
}

/// One label/value bucket of a series override.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleConfig {
    /// Bucket label.
    pub label: String,
    /// Bucket consumption (kWh, >= 0).
    pub kwh: f32,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.tick_interval_secs"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl DashboardConfig {
    /// Returns the demo preset: the four sample devices and the built-in
    /// series fixture. The AC and the lights carry sampling bands so their
    /// readings drift between ticks.
    pub fn demo() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            devices: vec![
                DeviceConfig {
                    id: "ac".to_string(),
                    name: "Air conditioner".to_string(),
                    icon: "❄".to_string(),
                    power_kw: 2.8,
                    on: true,
                    band: Some(BandConfig {
                        min_kw: 2.5,
                        max_kw: 3.1,
                    }),
                },
                DeviceConfig {
                    id: "light".to_string(),
                    name: "Lights".to_string(),
                    icon: "💡".to_string(),
                    power_kw: 0.15,
                    on: true,
                    band: Some(BandConfig {
                        min_kw: 0.12,
                        max_kw: 0.20,
                    }),
                },
                DeviceConfig {
                    id: "tv".to_string(),
                    name: "TV".to_string(),
                    icon: "📺".to_string(),
                    power_kw: 1.5,
                    on: false,
                    band: None,
                },
                DeviceConfig {
                    id: "fridge".to_string(),
                    name: "Fridge".to_string(),
                    icon: "🧊".to_string(),
                    power_kw: 0.45,
                    on: true,
                    band: None,
                },
            ],
            series: SeriesConfig::default(),
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["demo"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "demo" => Ok(Self::demo()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.simulation;
        if s.tick_interval_secs == 0 {
            errors.push(ConfigError {
                field: "simulation.tick_interval_secs".into(),
                message: "must be > 0".into(),
            });
        }
        if s.ticks == 0 {
            errors.push(ConfigError {
                field: "simulation.ticks".into(),
                message: "must be > 0".into(),
            });
        }

        if self.devices.is_empty() {
            errors.push(ConfigError {
                field: "devices".into(),
                message: "at least one device is required".into(),
            });
        }
        for (i, device) in self.devices.iter().enumerate() {
            let path = format!("devices[{i}]");
            if device.id.is_empty() {
                errors.push(ConfigError {
                    field: format!("{path}.id"),
                    message: "must not be empty".into(),
                });
            }
            if self.devices[..i].iter().any(|d| d.id == device.id) {
                errors.push(ConfigError {
                    field: format!("{path}.id"),
                    message: format!("duplicate device id \"{}\"", device.id),
                });
            }
            if device.power_kw < 0.0 {
                errors.push(ConfigError {
                    field: format!("{path}.power_kw"),
                    message: "must be >= 0".into(),
                });
            }
            if let Some(band) = &device.band {
                if band.min_kw < 0.0 {
                    errors.push(ConfigError {
                        field: format!("{path}.band.min_kw"),
                        message: "must be >= 0".into(),
                    });
                }
                if band.min_kw > band.max_kw {
                    errors.push(ConfigError {
                        field: format!("{path}.band.min_kw"),
                        message: "must be <= band.max_kw".into(),
                    });
                }
            }
        }

        for (name, override_) in [("weekly", &self.series.weekly), ("monthly", &self.series.monthly)]
        {
            if let Some(samples) = override_ {
                if samples.is_empty() {
                    errors.push(ConfigError {
                        field: format!("series.{name}"),
                        message: "override must not be empty".into(),
                    });
                }
                for (i, sample) in samples.iter().enumerate() {
                    if sample.kwh < 0.0 {
                        errors.push(ConfigError {
                            field: format!("series.{name}[{i}].kwh"),
                            message: "must be >= 0".into(),
                        });
                    }
                }
            }
        }
        if let Some(hourly) = &self.series.hourly {
            if hourly.len() != HOURS_PER_DAY {
                errors.push(ConfigError {
                    field: "series.hourly".into(),
                    message: format!("must have exactly {HOURS_PER_DAY} values, got {}", hourly.len()),
                });
            }
            if hourly.iter().any(|&v| v < 0.0) {
                errors.push(ConfigError {
                    field: "series.hourly".into(),
                    message: "values must be >= 0".into(),
                });
            }
        }

        errors
    }

    /// Builds the device registry from the declared devices.
    pub fn build_registry(&self) -> DeviceRegistry {
        let devices = self
            .devices
            .iter()
            .map(|d| Device {
                id: d.id.clone(),
                name: d.name.clone(),
                icon: d.icon.clone(),
                is_on: d.on,
                power_kw: d.power_kw,
                band: d.band.map(|b| PowerBand::new(b.min_kw, b.max_kw)),
            })
            .collect();
        DeviceRegistry::new(devices)
    }

    /// Builds the series store, applying any overrides on top of the
    /// built-in fixture.
    pub fn build_store(&self) -> PowerSeriesStore {
        let fixture = PowerSeriesStore::demo();
        let from_override = |samples: &[SampleConfig]| {
            samples
                .iter()
                .map(|s| PowerSample::new(&s.label, s.kwh))
                .collect::<Vec<_>>()
        };

        let weekly = self.series.weekly.as_deref().map_or_else(
            || fixture.series_for(crate::series::ViewMode::Week).to_vec(),
            from_override,
        );
        let monthly = self.series.monthly.as_deref().map_or_else(
            || fixture.series_for(crate::series::ViewMode::Month).to_vec(),
            from_override,
        );
        let hourly = self
            .series
            .hourly
            .clone()
            .unwrap_or_else(|| fixture.hourly().iter().map(|s| s.kwh).collect());

        PowerSeriesStore::new(weekly, monthly, hourly)
    }
}
