//! Random power-draw sampling for the simulation tick.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Inclusive power-draw band a simulatable device samples within (kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerBand {
    /// Lower bound (kW, >= 0).
    pub min_kw: f32,
    /// Upper bound (kW, >= `min_kw`).
    pub max_kw: f32,
}

impl PowerBand {
    /// Creates a band after ordering the bounds.
    pub fn new(min_kw: f32, max_kw: f32) -> Self {
        if min_kw <= max_kw {
            Self { min_kw, max_kw }
        } else {
            Self {
                min_kw: max_kw,
                max_kw: min_kw,
            }
        }
    }
}

/// Sampling strategy drawn on every simulation tick.
///
/// Injectable so tests can substitute a deterministic sequence for the
/// production RNG.
pub trait PowerSampler {
    /// Draws the next power value from the given band (kW).
    fn sample(&mut self, band: PowerBand) -> f32;
}

/// Production sampler: uniform draw over the band, seeded for reproducibility.
#[derive(Debug)]
pub struct UniformSampler {
    rng: StdRng,
}

impl UniformSampler {
    /// Creates a sampler from a master seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PowerSampler for UniformSampler {
    fn sample(&mut self, band: PowerBand) -> f32 {
        if band.min_kw >= band.max_kw {
            return band.min_kw;
        }
        self.rng.random_range(band.min_kw..=band.max_kw)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted. Test helper.
#[derive(Debug)]
pub struct SequenceSampler {
    values: Vec<f32>,
    next: usize,
}

impl SequenceSampler {
    /// Creates a sampler that replays `values` in order, wrapping around.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, next: 0 }
    }
}

impl PowerSampler for SequenceSampler {
    fn sample(&mut self, band: PowerBand) -> f32 {
        if self.values.is_empty() {
            return band.min_kw;
        }
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
