//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

use crate::view::{ChartStyle, SlotStyle};

/// Device-on / healthy value color.
pub const ON_COLOR: Color = Color::Green;
/// Device-off value color.
pub const OFF_COLOR: Color = Color::Red;
/// Highlighted statistic color.
pub const ACCENT_COLOR: Color = Color::Cyan;
/// Primary series color.
pub const PRIMARY_COLOR: Color = Color::Cyan;
/// Highlighted series color.
pub const HIGHLIGHT_COLOR: Color = Color::Yellow;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Maps a slot style hint to its terminal color.
pub fn slot_color(style: Option<SlotStyle>) -> Color {
    match style {
        Some(SlotStyle::On) => ON_COLOR,
        Some(SlotStyle::Off) => OFF_COLOR,
        Some(SlotStyle::Accent) => ACCENT_COLOR,
        None => Color::Reset,
    }
}

/// Maps a chart color hint to its terminal color.
pub fn chart_color(color: ChartStyle) -> Color {
    match color {
        ChartStyle::Primary => PRIMARY_COLOR,
        ChartStyle::Highlight => HIGHLIGHT_COLOR,
    }
}

/// Computes Y-axis bounds from chart values with 10% padding.
pub fn auto_bounds_y(values: &[f32]) -> [f64; 2] {
    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let range = f64::from(max - min).max(0.1);
    let pad = range * 0.1;
    [(f64::from(min) - pad).min(0.0), f64::from(max) + pad]
}
