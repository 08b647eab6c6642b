//! TUI application state: the controller, its frame buffer, and timer state.

use std::time::{Duration, Instant};

use crate::clock;
use crate::config::DashboardConfig;
use crate::devices::UniformSampler;
use crate::series::ViewMode;
use crate::view::{FrameBuffer, RANK_SLOTS, ViewSync};

/// Clock slot refresh cadence.
pub const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

/// TUI application state.
pub struct App {
    /// The view-sync controller owning all dashboard state.
    pub controller: ViewSync<UniformSampler>,
    /// The frame buffer the controller writes and the layout paints.
    pub frame: FrameBuffer,
    /// Whether the simulation timer is paused (the clock keeps running).
    pub paused: bool,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Simulation tick cadence.
    pub tick_interval: Duration,
    /// When the last simulation tick fired.
    pub last_tick: Instant,
    /// When the clock slot was last refreshed.
    pub last_clock: Instant,
    /// Configuration kept for restart.
    config: DashboardConfig,
}

impl App {
    /// Creates the app from a validated configuration and paints the first
    /// frame.
    pub fn new(config: DashboardConfig) -> Self {
        let registry = config.build_registry();
        let mut frame = FrameBuffer::for_dashboard(&registry, RANK_SLOTS);
        let mut controller = ViewSync::new(
            registry,
            config.build_store(),
            UniformSampler::new(config.simulation.seed),
        );
        controller.refresh_all(&mut frame);

        let tick_interval = Duration::from_secs(config.simulation.tick_interval_secs);
        let now = Instant::now();
        Self {
            controller,
            frame,
            paused: false,
            quit: false,
            tick_interval,
            last_tick: now,
            last_clock: now,
            config,
        }
    }

    /// Runs one simulation tick against the frame buffer.
    pub fn tick(&mut self) {
        self.controller.on_tick(&mut self.frame);
        self.last_tick = Instant::now();
    }

    /// Refreshes the header clock slot.
    pub fn clock_tick(&mut self) {
        self.controller
            .push_clock(clock::now_seconds_of_day(), &mut self.frame);
        self.last_clock = Instant::now();
    }

    /// Toggles pause/resume of the simulation timer.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Switches the primary chart's view mode.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.controller.on_mode_switch(mode, &mut self.frame);
    }

    /// Toggles the Nth device (0-based registry order). Out-of-range
    /// indexes are ignored.
    pub fn toggle_device(&mut self, index: usize) {
        let Some(id) = self
            .controller
            .registry()
            .devices()
            .get(index)
            .map(|d| d.id.clone())
        else {
            return;
        };
        // id came from the registry, so UnknownDevice cannot occur
        let _ = self.controller.on_toggle(&id, &mut self.frame);
    }

    /// Rebuilds all state from the original configuration.
    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
    }
}
