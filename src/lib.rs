//! Home-energy dashboard: simulated smart-home device state, static
//! consumption series, and the derived-view recomputation that keeps a
//! rendering sink in step with every state change.

/// Wall-clock formatting for the header clock slot.
pub mod clock;
/// TOML configuration and presets.
pub mod config;
/// Device registry and power sampling.
pub mod devices;
pub mod error;
/// CSV telemetry export.
pub mod export;
/// Headless text reports.
pub mod report;
/// Static consumption series and view-mode selection.
pub mod series;
/// Pure derived statistics: summaries, peak window, ranking.
pub mod stats;
#[cfg(feature = "tui")]
pub mod tui;
/// Sink contract, frame buffer, and view-sync controller.
pub mod view;
