//! Derived statistics over the device registry and the consumption series.
//!
//! Pure functions: deterministic given their inputs, no side effects. The
//! controller calls these on every state change and pushes the results to
//! the rendering sink.

use crate::devices::Device;
use crate::series::{HourlySample, PowerSample, ViewMode};

/// Divisor semantics of a series average.
///
/// The unit label itself is a presentation concern, but which divisor
/// applies is decided here, with the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageBasis {
    /// Weekly series: average over daily buckets.
    PerDay,
    /// Monthly series: average over weekly buckets.
    PerWeek,
}

impl AverageBasis {
    /// The basis that applies to the given view mode.
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Week => Self::PerDay,
            ViewMode::Month => Self::PerWeek,
        }
    }

    /// Unit label suffix for display, e.g. `"kWh/day"`.
    pub fn unit_label(self) -> &'static str {
        match self {
            Self::PerDay => "kWh/day",
            Self::PerWeek => "kWh/week",
        }
    }
}

/// Total and average consumption of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    /// Sum of all bucket values (kWh).
    pub total_kwh: f32,
    /// `total_kwh / bucket count` (kWh); 0 for an empty series.
    pub average_kwh: f32,
    /// Which divisor semantics the average carries.
    pub basis: AverageBasis,
}

/// Sums a series and averages it over its bucket count.
pub fn summarize(series: &[PowerSample], mode: ViewMode) -> SeriesSummary {
    let total_kwh: f32 = series.iter().map(|s| s.kwh).sum();
    let average_kwh = if series.is_empty() {
        0.0
    } else {
        total_kwh / series.len() as f32
    };
    SeriesSummary {
        total_kwh,
        average_kwh,
        basis: AverageBasis::for_mode(mode),
    }
}

/// The one-hour interval starting at the hour with maximum consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakWindow {
    /// Window label, e.g. `"19:00-20:00"`; the end hour wraps at 24.
    pub label: String,
    /// Consumption of the peak hour (kWh).
    pub kwh: f32,
}

/// Finds the peak one-hour window of the cyclic hourly series.
///
/// The first occurrence wins on ties. Returns `None` for an empty series.
pub fn peak_window(hourly: &[HourlySample]) -> Option<PeakWindow> {
    let mut peak_idx = 0;
    let mut peak_kwh = f32::NEG_INFINITY;
    for (i, sample) in hourly.iter().enumerate() {
        if sample.kwh > peak_kwh {
            peak_idx = i;
            peak_kwh = sample.kwh;
        }
    }
    let start = hourly.get(peak_idx)?;
    let end = &hourly[(peak_idx + 1) % hourly.len()];
    Some(PeakWindow {
        label: format!("{}-{}", start.label(), end.label()),
        kwh: start.kwh,
    })
}

/// One row of the consumption ranking. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    /// Device id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Effective power at ranking time (kW).
    pub effective_kw: f32,
}

/// Ranks devices by effective power, descending.
///
/// The sort is stable, so devices with equal effective power keep their
/// registry declaration order. Returns at most `top_n` entries and all
/// devices when fewer exist; never fails.
pub fn ranking(devices: &[Device], top_n: usize) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = devices
        .iter()
        .map(|d| RankingEntry {
            id: d.id.clone(),
            name: d.name.clone(),
            effective_kw: d.effective_kw(),
        })
        .collect();
    entries.sort_by(|a, b| b.effective_kw.total_cmp(&a.effective_kw));
    entries.truncate(top_n);
    entries
}
