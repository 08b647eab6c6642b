//! Shared fixtures for integration tests.

use home_dash::config::DashboardConfig;
use home_dash::devices::{DeviceRegistry, SequenceSampler};
use home_dash::series::PowerSeriesStore;
use home_dash::view::{FrameBuffer, RANK_SLOTS, ViewSync};

/// The demo device registry (ac on/2.8, light on/0.15, tv off/1.5,
/// fridge on/0.45).
pub fn demo_registry() -> DeviceRegistry {
    DashboardConfig::demo().build_registry()
}

/// A controller over the demo preset with a deterministic sampler, plus the
/// frame buffer it writes into. The first frame is already painted.
pub fn demo_controller(sample_values: Vec<f32>) -> (ViewSync<SequenceSampler>, FrameBuffer) {
    let registry = demo_registry();
    let mut frame = FrameBuffer::for_dashboard(&registry, RANK_SLOTS);
    let mut controller = ViewSync::new(
        registry,
        PowerSeriesStore::demo(),
        SequenceSampler::new(sample_values),
    );
    controller.refresh_all(&mut frame);
    (controller, frame)
}
