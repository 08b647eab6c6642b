//! View synchronization: the event handlers that mutate state, recompute
//! derived values, and push them to the rendering sink.

use crate::clock;
use crate::devices::{DeviceRegistry, PowerSampler};
use crate::error::DashError;
use crate::series::{PowerSeriesStore, ViewMode};
use crate::stats;
use crate::view::sink::{ChartKind, ChartSpec, ChartStyle, RenderSink, SlotStyle, charts, slots};

/// Number of ranking rows on the dashboard.
pub const RANK_SLOTS: usize = 3;

/// Owns the dashboard state and drives every recompute pass.
///
/// All transitions run to completion on the caller's thread: a user action
/// (toggle, mode switch) or a timer firing (simulation tick, clock tick)
/// mutates state, recomputes the affected derived values, and writes them
/// to the sink before the next event is processed.
///
/// Slot writes are isolated per field: a missing slot is counted in
/// [`ViewSync::dropped_writes`] and skipped, never aborting the rest of
/// the pass.
pub struct ViewSync<S: PowerSampler> {
    registry: DeviceRegistry,
    store: PowerSeriesStore,
    mode: ViewMode,
    sampler: S,
    tick: u64,
    dropped_writes: usize,
}

impl<S: PowerSampler> ViewSync<S> {
    /// Creates a controller starting in [`ViewMode::Week`].
    pub fn new(registry: DeviceRegistry, store: PowerSeriesStore, sampler: S) -> Self {
        Self {
            registry,
            store,
            mode: ViewMode::Week,
            sampler,
            tick: 0,
            dropped_writes: 0,
        }
    }

    /// The device registry.
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// The series store.
    pub fn store(&self) -> &PowerSeriesStore {
        &self.store
    }

    /// The active view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Number of simulation ticks executed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Number of slot writes dropped because the slot was missing.
    pub fn dropped_writes(&self) -> usize {
        self.dropped_writes
    }

    /// Full initial paint: device cards, both charts, statistics, ranking,
    /// and the clock.
    pub fn refresh_all(&mut self, sink: &mut dyn RenderSink) {
        for i in 0..self.registry.len() {
            let id = self.registry.devices()[i].id.clone();
            self.push_device(&id, sink);
        }
        self.push_stats(sink);
        self.push_peak(sink);
        self.push_ranking(sink);
        self.push_clock(clock::now_seconds_of_day(), sink);
    }

    /// Handles a device-toggle action.
    ///
    /// Flips the device, refreshes its card, and re-ranks.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::UnknownDevice`] if no device has that id; the
    /// sink is left untouched in that case.
    ///
    /// # Returns
    ///
    /// The device's new on/off state.
    pub fn on_toggle(&mut self, id: &str, sink: &mut dyn RenderSink) -> Result<bool, DashError> {
        let is_on = self.registry.toggle(id)?;
        self.push_device(id, sink);
        self.push_ranking(sink);
        Ok(is_on)
    }

    /// Handles a view-mode switch.
    ///
    /// Recomputes the active series summary and replaces the primary chart.
    /// Switching to the mode already active repushes the same values, so
    /// the operation is idempotent.
    pub fn on_mode_switch(&mut self, mode: ViewMode, sink: &mut dyn RenderSink) {
        self.mode = mode;
        self.push_stats(sink);
    }

    /// Handles one simulation tick.
    ///
    /// Every device with a configured band that is currently on draws a new
    /// power value; its card and the ranking are refreshed. Devices that
    /// are off keep their stored draw untouched.
    ///
    /// # Returns
    ///
    /// The tick index just executed (1-based).
    pub fn on_tick(&mut self, sink: &mut dyn RenderSink) -> u64 {
        self.tick += 1;
        for i in 0..self.registry.len() {
            let device = &self.registry.devices()[i];
            let (Some(band), true) = (device.band, device.is_on) else {
                continue;
            };
            let id = device.id.clone();
            let value = self.sampler.sample(band).max(0.0);
            if self.registry.set_power_kw(&id, value).is_ok() {
                self.push_device(&id, sink);
            }
        }
        self.push_ranking(sink);
        self.tick
    }

    /// Writes the header clock slot from a seconds-of-day value.
    ///
    /// Driven by its own 1 s timer, independent of the simulation tick.
    pub fn push_clock(&mut self, seconds_of_day: u64, sink: &mut dyn RenderSink) {
        let text = clock::format_hms(seconds_of_day);
        self.write(sink, slots::CURRENT_TIME, &text, None);
    }

    fn push_device(&mut self, id: &str, sink: &mut dyn RenderSink) {
        let Some(device) = self.registry.get(id) else {
            return;
        };
        let (status, style, power) = if device.is_on {
            ("ON", SlotStyle::On, format!("{:.2} kW", device.power_kw))
        } else {
            ("OFF", SlotStyle::Off, "0 kW".to_string())
        };
        self.write(sink, &slots::device_status(id), status, Some(style));
        self.write(sink, &slots::device_power(id), &power, Some(style));
    }

    fn push_stats(&mut self, sink: &mut dyn RenderSink) {
        let series = self.store.series_for(self.mode);
        let summary = stats::summarize(series, self.mode);

        let spec = ChartSpec {
            kind: ChartKind::Bar,
            categories: series.iter().map(|s| s.label.clone()).collect(),
            values: series.iter().map(|s| s.kwh).collect(),
            series_label: "Consumption".to_string(),
            color: ChartStyle::Primary,
        };
        sink.push_chart(charts::POWER, spec);

        let total = format!("{:.1} kWh", summary.total_kwh);
        let average = format!("{:.1} {}", summary.average_kwh, summary.basis.unit_label());
        self.write(sink, slots::TOTAL_POWER, &total, Some(SlotStyle::Accent));
        self.write(sink, slots::AVG_POWER, &average, Some(SlotStyle::Accent));
    }

    fn push_peak(&mut self, sink: &mut dyn RenderSink) {
        let hourly = self.store.hourly();
        let spec = ChartSpec {
            kind: ChartKind::Area,
            categories: hourly.iter().map(|s| s.label()).collect(),
            values: hourly.iter().map(|s| s.kwh).collect(),
            series_label: "Consumption".to_string(),
            color: ChartStyle::Highlight,
        };
        sink.push_chart(charts::PEAK_HOURS, spec);

        if let Some(peak) = stats::peak_window(hourly) {
            let value = format!("{:.1} kWh", peak.kwh);
            self.write(sink, slots::PEAK_TIME, &peak.label, Some(SlotStyle::Accent));
            self.write(sink, slots::PEAK_VALUE, &value, Some(SlotStyle::Accent));
        }
    }

    fn push_ranking(&mut self, sink: &mut dyn RenderSink) {
        let entries = stats::ranking(self.registry.devices(), RANK_SLOTS);
        for (i, entry) in entries.iter().enumerate() {
            let position = i + 1;
            let power = if entry.effective_kw > 0.0 {
                format!("{:.2} kW", entry.effective_kw)
            } else {
                "0 kW".to_string()
            };
            self.write(sink, &slots::rank_name(position), &entry.name, None);
            self.write(sink, &slots::rank_power(position), &power, None);
        }
    }

    fn write(
        &mut self,
        sink: &mut dyn RenderSink,
        slot_id: &str,
        text: &str,
        style: Option<SlotStyle>,
    ) {
        if sink.set_slot(slot_id, text, style).is_err() {
            self.dropped_writes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{Device, PowerBand, SequenceSampler};
    use crate::view::frame::FrameBuffer;

    fn demo_devices() -> Vec<Device> {
        vec![
            Device {
                id: "ac".to_string(),
                name: "Air conditioner".to_string(),
                icon: "❄".to_string(),
                is_on: true,
                power_kw: 2.8,
                band: Some(PowerBand::new(2.5, 3.1)),
            },
            Device {
                id: "light".to_string(),
                name: "Lights".to_string(),
                icon: "💡".to_string(),
                is_on: true,
                power_kw: 0.15,
                band: Some(PowerBand::new(0.12, 0.20)),
            },
            Device {
                id: "tv".to_string(),
                name: "TV".to_string(),
                icon: "📺".to_string(),
                is_on: false,
                power_kw: 1.5,
                band: None,
            },
            Device {
                id: "fridge".to_string(),
                name: "Fridge".to_string(),
                icon: "🧊".to_string(),
                is_on: true,
                power_kw: 0.45,
                band: None,
            },
        ]
    }

    fn make_controller(values: Vec<f32>) -> (ViewSync<SequenceSampler>, FrameBuffer) {
        let registry = DeviceRegistry::new(demo_devices());
        let frame = FrameBuffer::for_dashboard(&registry, RANK_SLOTS);
        let controller = ViewSync::new(
            registry,
            PowerSeriesStore::demo(),
            SequenceSampler::new(values),
        );
        (controller, frame)
    }

    #[test]
    fn refresh_all_paints_every_panel() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        controller.refresh_all(&mut frame);

        assert_eq!(frame.slot_text("ac-status"), Some("ON"));
        assert_eq!(frame.slot_text("ac-power"), Some("2.80 kW"));
        assert_eq!(frame.slot_text("tv-status"), Some("OFF"));
        assert_eq!(frame.slot_text("tv-power"), Some("0 kW"));
        assert_eq!(frame.slot_text("peakTime"), Some("19:00-20:00"));
        assert_eq!(frame.slot_text("peakValue"), Some("4.9 kWh"));
        assert_eq!(frame.slot_text("totalPower"), Some("1119.5 kWh"));
        assert_eq!(frame.slot_text("avgPower"), Some("159.9 kWh/day"));
        assert!(frame.chart(charts::POWER).is_some());
        assert!(frame.chart(charts::PEAK_HOURS).is_some());
        assert!(frame.slot_text("currentTime").is_some());
        assert_eq!(controller.dropped_writes(), 0);
    }

    #[test]
    fn charts_carry_their_color_hints() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        controller.refresh_all(&mut frame);

        assert_eq!(
            frame.chart(charts::POWER).map(|c| c.color),
            Some(ChartStyle::Primary)
        );
        assert_eq!(
            frame.chart(charts::PEAK_HOURS).map(|c| c.color),
            Some(ChartStyle::Highlight)
        );
    }

    #[test]
    fn initial_ranking_matches_effective_power() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        controller.refresh_all(&mut frame);

        assert_eq!(frame.slot_text("rank1-name"), Some("Air conditioner"));
        assert_eq!(frame.slot_text("rank1-power"), Some("2.80 kW"));
        assert_eq!(frame.slot_text("rank2-name"), Some("Fridge"));
        assert_eq!(frame.slot_text("rank3-name"), Some("Lights"));
    }

    #[test]
    fn toggling_tv_on_reranks() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        controller.refresh_all(&mut frame);

        let is_on = controller.on_toggle("tv", &mut frame);
        assert_eq!(is_on, Ok(true));
        assert_eq!(frame.slot_text("tv-status"), Some("ON"));
        assert_eq!(frame.slot_text("tv-power"), Some("1.50 kW"));
        // light drops out of the top 3
        assert_eq!(frame.slot_text("rank1-name"), Some("Air conditioner"));
        assert_eq!(frame.slot_text("rank2-name"), Some("TV"));
        assert_eq!(frame.slot_text("rank3-name"), Some("Fridge"));
    }

    #[test]
    fn toggle_unknown_device_leaves_sink_untouched() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        let err = controller.on_toggle("heater", &mut frame);
        assert_eq!(err, Err(DashError::UnknownDevice("heater".to_string())));
        assert_eq!(frame.slot("rank1-name"), None);
    }

    #[test]
    fn mode_switch_swaps_chart_and_labels() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        controller.on_mode_switch(ViewMode::Month, &mut frame);

        let chart = frame.chart(charts::POWER);
        assert_eq!(chart.map(|c| c.categories.len()), Some(4));
        assert_eq!(frame.slot_text("totalPower"), Some("4915.9 kWh"));
        assert_eq!(frame.slot_text("avgPower"), Some("1229.0 kWh/week"));
    }

    #[test]
    fn mode_round_trip_restores_week_summary() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        controller.on_mode_switch(ViewMode::Week, &mut frame);
        let before = frame.slot_text("totalPower").map(str::to_string);

        controller.on_mode_switch(ViewMode::Month, &mut frame);
        controller.on_mode_switch(ViewMode::Week, &mut frame);
        assert_eq!(frame.slot_text("totalPower").map(str::to_string), before);
    }

    #[test]
    fn tick_resamples_only_banded_on_devices() {
        let (mut controller, mut frame) = make_controller(vec![3.0, 0.18]);
        controller.refresh_all(&mut frame);

        assert_eq!(controller.on_tick(&mut frame), 1);
        assert_eq!(frame.slot_text("ac-power"), Some("3.00 kW"));
        assert_eq!(frame.slot_text("light-power"), Some("0.18 kW"));
        // fridge has no band, tv is off: both untouched
        assert_eq!(frame.slot_text("fridge-power"), Some("0.45 kW"));
        assert_eq!(frame.slot_text("tv-power"), Some("0 kW"));
    }

    #[test]
    fn tick_skips_banded_device_that_is_off() {
        let (mut controller, mut frame) = make_controller(vec![9.9]);
        controller.refresh_all(&mut frame);
        controller.on_toggle("ac", &mut frame).ok();

        controller.on_tick(&mut frame);
        // the sequence value went to the light, not the off ac
        assert_eq!(frame.slot_text("ac-power"), Some("0 kW"));
        assert_eq!(
            controller.registry().get("ac").map(|d| d.power_kw),
            Some(2.8)
        );
        assert_eq!(frame.slot_text("light-power"), Some("9.90 kW"));
    }

    #[test]
    fn tick_updates_ranking() {
        // light jumps above the ac
        let (mut controller, mut frame) = make_controller(vec![2.0, 5.0]);
        controller.refresh_all(&mut frame);
        controller.on_tick(&mut frame);

        assert_eq!(frame.slot_text("rank1-name"), Some("Lights"));
        assert_eq!(frame.slot_text("rank2-name"), Some("Air conditioner"));
    }

    #[test]
    fn missing_slot_does_not_abort_the_pass() {
        let registry = DeviceRegistry::new(demo_devices());
        // frame without the peak slots; everything else registered
        let mut frame = FrameBuffer::new();
        for device in registry.devices() {
            frame.register_slot(&slots::device_status(&device.id));
            frame.register_slot(&slots::device_power(&device.id));
        }
        frame.register_slot(slots::TOTAL_POWER);
        frame.register_slot(slots::AVG_POWER);
        frame.register_slot(slots::CURRENT_TIME);
        for position in 1..=RANK_SLOTS {
            frame.register_slot(&slots::rank_name(position));
            frame.register_slot(&slots::rank_power(position));
        }

        let mut controller = ViewSync::new(
            registry,
            PowerSeriesStore::demo(),
            SequenceSampler::new(Vec::new()),
        );
        controller.refresh_all(&mut frame);

        assert_eq!(controller.dropped_writes(), 2);
        // later fields of the pass still landed
        assert_eq!(frame.slot_text("rank1-name"), Some("Air conditioner"));
        assert_eq!(frame.slot_text("totalPower"), Some("1119.5 kWh"));
    }

    #[test]
    fn clock_slot_is_independent_of_ticks() {
        let (mut controller, mut frame) = make_controller(Vec::new());
        controller.push_clock(19 * 3600 + 42, &mut frame);
        assert_eq!(frame.slot_text("currentTime"), Some("19:00:42"));
        assert_eq!(controller.tick_count(), 0);
    }
}
