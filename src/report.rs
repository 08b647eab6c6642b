//! Text reports for the headless runner.

use std::fmt;

use crate::devices::DeviceRegistry;
use crate::series::{PowerSeriesStore, ViewMode};
use crate::stats::{self, PeakWindow, RankingEntry, SeriesSummary};
use crate::view::RANK_SLOTS;

/// Per-device readings after one simulation tick, for the per-tick log line.
#[derive(Debug, Clone)]
pub struct TickLine {
    /// Tick index (1-based).
    pub tick: u64,
    /// `(device id, is_on, effective kW)` in declaration order.
    pub readings: Vec<(String, bool, f32)>,
}

impl TickLine {
    /// Captures the registry state after a tick.
    pub fn capture(tick: u64, registry: &DeviceRegistry) -> Self {
        let readings = registry
            .devices()
            .iter()
            .map(|d| (d.id.clone(), d.is_on, d.effective_kw()))
            .collect();
        Self { tick, readings }
    }

    /// Sum of effective power across all devices (kW).
    pub fn active_kw(&self) -> f32 {
        self.readings.iter().map(|&(_, _, kw)| kw).sum()
    }
}

impl fmt::Display for TickLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:>3} |", self.tick)?;
        for (id, is_on, kw) in &self.readings {
            if *is_on {
                write!(f, " {id}={kw:.2}")?;
            } else {
                write!(f, " {id}=off")?;
            }
        }
        write!(f, " | active={:.2} kW", self.active_kw())
    }
}

/// Aggregate dashboard state: the headless analog of the rendered panels.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Active view mode.
    pub mode: ViewMode,
    /// Total/average of the active series.
    pub summary: SeriesSummary,
    /// Peak one-hour window of the hourly series.
    pub peak: Option<PeakWindow>,
    /// Top consumers by effective power.
    pub ranking: Vec<RankingEntry>,
}

impl DashboardReport {
    /// Computes the report from current state.
    pub fn compute(registry: &DeviceRegistry, store: &PowerSeriesStore, mode: ViewMode) -> Self {
        Self {
            mode,
            summary: stats::summarize(store.series_for(mode), mode),
            peak: stats::peak_window(store.hourly()),
            ranking: stats::ranking(registry.devices(), RANK_SLOTS),
        }
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Dashboard ({} view) ---", self.mode)?;
        writeln!(f, "Total consumption:    {:.1} kWh", self.summary.total_kwh)?;
        writeln!(
            f,
            "Average consumption:  {:.1} {}",
            self.summary.average_kwh,
            self.summary.basis.unit_label()
        )?;
        if let Some(peak) = &self.peak {
            writeln!(f, "Peak window:          {} ({:.1} kWh)", peak.label, peak.kwh)?;
        }
        write!(f, "Top consumers:")?;
        for (i, entry) in self.ranking.iter().enumerate() {
            write!(f, "\n  {}. {:<18} {:.2} kW", i + 1, entry.name, entry.effective_kw)?;
        }
        Ok(())
    }
}
