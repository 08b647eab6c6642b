//! CSV export of per-tick device telemetry.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::devices::DeviceRegistry;

/// Schema v1 column header for CSV telemetry export.
pub const HEADER: &str = "tick,device_id,is_on,power_kw,effective_kw";

/// One device's state captured after a simulation tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRow {
    /// Tick index the row was captured after (1-based; 0 = initial state).
    pub tick: u64,
    /// Device id.
    pub device_id: String,
    /// On/off state at capture time.
    pub is_on: bool,
    /// Stored power draw (kW).
    pub power_kw: f32,
    /// Effective power draw (kW; 0 while off).
    pub effective_kw: f32,
}

/// Captures one row per device from the registry, in declaration order.
pub fn capture_rows(tick: u64, registry: &DeviceRegistry) -> Vec<TelemetryRow> {
    registry
        .devices()
        .iter()
        .map(|d| TelemetryRow {
            tick,
            device_id: d.id.clone(),
            is_on: d.is_on,
            power_kw: d.power_kw,
            effective_kw: d.effective_kw(),
        })
        .collect()
}

/// Exports telemetry rows to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(rows: &[TelemetryRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(rows, buf)
}

/// Writes telemetry rows as CSV to any writer.
///
/// Writes a header row followed by one row per entry; output is
/// deterministic for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(rows: &[TelemetryRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;
    for row in rows {
        wtr.write_record(&[
            row.tick.to_string(),
            row.device_id.clone(),
            row.is_on.to_string(),
            format!("{:.4}", row.power_kw),
            format!("{:.4}", row.effective_kw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
