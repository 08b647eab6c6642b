//! Static consumption series and the view-mode selection that picks among them.

use std::fmt;

/// Number of entries in the hourly series; hour 23 wraps to hour 0.
pub const HOURS_PER_DAY: usize = 24;

/// Aggregation timescale for the primary consumption chart.
///
/// Changed only by explicit user action; determines which [`PowerSample`]
/// series is active and which divisor semantics the average carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Seven daily buckets.
    Week,
    /// Four weekly buckets.
    Month,
}

impl ViewMode {
    /// Parses a mode from its user-facing tag (`"week"` / `"month"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// The user-facing tag for this mode.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One bucket of a weekly or monthly consumption series.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSample {
    /// Bucket name in display (chronological) order, e.g. `"Mon"` or `"Week 1"`.
    pub label: String,
    /// Consumption for the bucket (kWh, >= 0).
    pub kwh: f32,
}

impl PowerSample {
    /// Convenience constructor.
    pub fn new(label: &str, kwh: f32) -> Self {
        Self {
            label: label.to_string(),
            kwh,
        }
    }
}

/// One hour of the cyclic 24-entry hourly series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlySample {
    /// Hour of day, 0..=23.
    pub hour: u8,
    /// Consumption sampled for this hour (kWh, >= 0).
    pub kwh: f32,
}

impl HourlySample {
    /// Renders the hour as the dashboard label, e.g. `"19:00"`.
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

/// Read-only store of the weekly, monthly, and hourly consumption series.
///
/// Fixed after construction; a production analog would source these from a
/// metering pipeline.
#[derive(Debug, Clone)]
pub struct PowerSeriesStore {
    weekly: Vec<PowerSample>,
    monthly: Vec<PowerSample>,
    hourly: Vec<HourlySample>,
}

impl PowerSeriesStore {
    /// Builds a store from explicit series.
    ///
    /// # Panics
    ///
    /// Panics if `hourly` does not have exactly [`HOURS_PER_DAY`] entries;
    /// the peak-window wrap-around depends on it. Config validation rejects
    /// bad overrides before they reach this point.
    pub fn new(weekly: Vec<PowerSample>, monthly: Vec<PowerSample>, hourly: Vec<f32>) -> Self {
        assert_eq!(
            hourly.len(),
            HOURS_PER_DAY,
            "hourly series must have {HOURS_PER_DAY} entries"
        );
        let hourly = hourly
            .into_iter()
            .enumerate()
            .map(|(h, kwh)| HourlySample { hour: h as u8, kwh })
            .collect();
        Self {
            weekly,
            monthly,
            hourly,
        }
    }

    /// The built-in demo fixture.
    pub fn demo() -> Self {
        let weekly = [
            ("Mon", 145.2),
            ("Tue", 152.8),
            ("Wed", 138.5),
            ("Thu", 165.3),
            ("Fri", 172.1),
            ("Sat", 189.4),
            ("Sun", 156.2),
        ]
        .iter()
        .map(|&(label, kwh)| PowerSample::new(label, kwh))
        .collect();

        let monthly = [
            ("Week 1", 1159.2),
            ("Week 2", 1245.6),
            ("Week 3", 1182.4),
            ("Week 4", 1328.7),
        ]
        .iter()
        .map(|&(label, kwh)| PowerSample::new(label, kwh))
        .collect();

        let hourly = vec![
            1.2, 0.9, 0.8, 0.7, 0.8, 1.1, 1.5, 2.3, 3.1, 3.8, 4.2, 4.5, 4.3, 4.1, 4.8, 4.7, 4.2,
            4.0, 4.6, 4.9, 4.4, 3.8, 3.2, 2.1,
        ];

        Self::new(weekly, monthly, hourly)
    }

    /// The series active under the given view mode, in display order.
    pub fn series_for(&self, mode: ViewMode) -> &[PowerSample] {
        match mode {
            ViewMode::Week => &self.weekly,
            ViewMode::Month => &self.monthly,
        }
    }

    /// The cyclic 24-entry hourly series.
    pub fn hourly(&self) -> &[HourlySample] {
        &self.hourly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_tags_round_trip() {
        assert_eq!(ViewMode::from_tag("week"), Some(ViewMode::Week));
        assert_eq!(ViewMode::from_tag("month"), Some(ViewMode::Month));
        assert_eq!(ViewMode::from_tag("year"), None);
        assert_eq!(ViewMode::Week.tag(), "week");
        assert_eq!(format!("{}", ViewMode::Month), "month");
    }

    #[test]
    fn demo_store_shapes() {
        let store = PowerSeriesStore::demo();
        assert_eq!(store.series_for(ViewMode::Week).len(), 7);
        assert_eq!(store.series_for(ViewMode::Month).len(), 4);
        assert_eq!(store.hourly().len(), HOURS_PER_DAY);
    }

    #[test]
    fn demo_hourly_peak_is_at_19() {
        let store = PowerSeriesStore::demo();
        let max = store
            .hourly()
            .iter()
            .max_by(|a, b| a.kwh.total_cmp(&b.kwh))
            .map(|s| (s.hour, s.kwh));
        assert_eq!(max, Some((19, 4.9)));
    }

    #[test]
    fn hourly_labels() {
        let store = PowerSeriesStore::demo();
        assert_eq!(store.hourly()[0].label(), "0:00");
        assert_eq!(store.hourly()[23].label(), "23:00");
    }

    #[test]
    fn series_order_is_chronological() {
        let store = PowerSeriesStore::demo();
        let labels: Vec<&str> = store
            .series_for(ViewMode::Week)
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    #[should_panic]
    fn short_hourly_series_panics() {
        PowerSeriesStore::new(Vec::new(), Vec::new(), vec![1.0; 12]);
    }
}
