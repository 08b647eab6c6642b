//! In-memory rendering sink holding the latest pushed dashboard state.

use std::collections::HashMap;

use crate::devices::DeviceRegistry;
use crate::error::DashError;
use crate::view::sink::{ChartSpec, RenderSink, SlotStyle, slots};

/// Latest value written to one display slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotValue {
    /// Display text.
    pub text: String,
    /// Optional color hint.
    pub style: Option<SlotStyle>,
}

/// The production sink: a frame of named slots and charts.
///
/// Slots must be registered up front; writes to unregistered ids fail with
/// [`DashError::MissingSlot`], mirroring an absent display element. The TUI
/// paints every frame from the buffer contents, and tests assert on them.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    slots: HashMap<String, Option<SlotValue>>,
    charts: HashMap<String, ChartSpec>,
}

impl FrameBuffer {
    /// Creates a buffer with no registered slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer with the standard dashboard slot set for the given
    /// device registry and `rank_slots` ranking rows.
    pub fn for_dashboard(registry: &DeviceRegistry, rank_slots: usize) -> Self {
        let mut frame = Self::new();
        frame.register_slot(slots::CURRENT_TIME);
        frame.register_slot(slots::TOTAL_POWER);
        frame.register_slot(slots::AVG_POWER);
        frame.register_slot(slots::PEAK_TIME);
        frame.register_slot(slots::PEAK_VALUE);
        for device in registry.devices() {
            frame.register_slot(&slots::device_status(&device.id));
            frame.register_slot(&slots::device_power(&device.id));
        }
        for position in 1..=rank_slots {
            frame.register_slot(&slots::rank_name(position));
            frame.register_slot(&slots::rank_power(position));
        }
        frame
    }

    /// Registers an empty slot.
    pub fn register_slot(&mut self, slot_id: &str) {
        self.slots.entry(slot_id.to_string()).or_insert(None);
    }

    /// The latest value of a slot, if any has been written.
    pub fn slot(&self, slot_id: &str) -> Option<&SlotValue> {
        self.slots.get(slot_id).and_then(Option::as_ref)
    }

    /// The latest text of a slot. Convenience for assertions and layout.
    pub fn slot_text(&self, slot_id: &str) -> Option<&str> {
        self.slot(slot_id).map(|v| v.text.as_str())
    }

    /// The latest chart pushed under the given id.
    pub fn chart(&self, chart_id: &str) -> Option<&ChartSpec> {
        self.charts.get(chart_id)
    }
}

impl RenderSink for FrameBuffer {
    fn push_chart(&mut self, chart_id: &str, spec: ChartSpec) {
        self.charts.insert(chart_id.to_string(), spec);
    }

    fn set_slot(
        &mut self,
        slot_id: &str,
        text: &str,
        style: Option<SlotStyle>,
    ) -> Result<(), DashError> {
        let Some(entry) = self.slots.get_mut(slot_id) else {
            return Err(DashError::MissingSlot(slot_id.to_string()));
        };
        *entry = Some(SlotValue {
            text: text.to_string(),
            style,
        });
        Ok(())
    }
}
