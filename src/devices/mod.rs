//! Device model: the registry of smart-home devices and the tick-time
//! power sampling strategy.

/// The device set and its on/off and power-draw state.
pub mod registry;
/// Random power-draw sampling for the simulation tick.
pub mod sampler;

// Re-export the main types for convenience
pub use registry::Device;
pub use registry::DeviceRegistry;
pub use sampler::PowerBand;
pub use sampler::PowerSampler;
pub use sampler::SequenceSampler;
pub use sampler::UniformSampler;
