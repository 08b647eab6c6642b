//! The rendering-sink contract: plain chart data and named display slots.
//!
//! The core never knows how anything is drawn. It pushes [`ChartSpec`]
//! values and slot text through [`RenderSink`]; the TUI paints from a
//! [`super::frame::FrameBuffer`] and tests inspect one directly.

use crate::error::DashError;

/// Stable ids of the dashboard's display slots and charts.
pub mod slots {
    /// Header clock slot.
    pub const CURRENT_TIME: &str = "currentTime";
    /// Total consumption of the active series.
    pub const TOTAL_POWER: &str = "totalPower";
    /// Average consumption of the active series.
    pub const AVG_POWER: &str = "avgPower";
    /// Peak-window interval label.
    pub const PEAK_TIME: &str = "peakTime";
    /// Peak-window consumption value.
    pub const PEAK_VALUE: &str = "peakValue";

    /// Status slot of one device card.
    pub fn device_status(device_id: &str) -> String {
        format!("{device_id}-status")
    }

    /// Power slot of one device card.
    pub fn device_power(device_id: &str) -> String {
        format!("{device_id}-power")
    }

    /// Name slot of one ranking row (1-based).
    pub fn rank_name(position: usize) -> String {
        format!("rank{position}-name")
    }

    /// Power slot of one ranking row (1-based).
    pub fn rank_power(position: usize) -> String {
        format!("rank{position}-power")
    }
}

/// Stable ids of the dashboard's charts.
pub mod charts {
    /// Primary weekly/monthly consumption chart.
    pub const POWER: &str = "powerChart";
    /// Hourly peak-hours chart.
    pub const PEAK_HOURS: &str = "peakHoursChart";
}

/// Chart rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Column chart (weekly/monthly consumption).
    Bar,
    /// Filled line chart (hourly profile).
    Area,
}

/// Optional color hint attached to a slot write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStyle {
    /// Device-on / healthy value.
    On,
    /// Device-off value.
    Off,
    /// Highlighted statistic.
    Accent,
}

/// Color hint attached to a chart push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// Primary series.
    Primary,
    /// Highlighted secondary series.
    Highlight,
}

/// A complete chart specification: categories, values, and styling hints.
///
/// Plain data only; the sink decides how to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// How the series should be drawn.
    pub kind: ChartKind,
    /// X-axis category labels, in display order.
    pub categories: Vec<String>,
    /// One value per category (kWh).
    pub values: Vec<f32>,
    /// Series legend label.
    pub series_label: String,
    /// Color hint for the series.
    pub color: ChartStyle,
}

/// Destination for recomputed dashboard values.
///
/// Slot writes are idempotent and slot-local: a failed write affects only
/// that slot, and the caller is expected to continue with the rest of the
/// pass.
pub trait RenderSink {
    /// Replaces the chart with the given id.
    fn push_chart(&mut self, chart_id: &str, spec: ChartSpec);

    /// Writes text (and an optional color hint) to a named slot.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::MissingSlot`] if the sink has no slot with
    /// that id.
    fn set_slot(
        &mut self,
        slot_id: &str,
        text: &str,
        style: Option<SlotStyle>,
    ) -> Result<(), DashError>;
}
