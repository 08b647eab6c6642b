//! View layer: the rendering-sink contract, the frame buffer that backs it,
//! and the controller that pushes recomputed values through it.

/// Event handlers and recompute passes.
pub mod controller;
/// In-memory sink holding the latest frame.
pub mod frame;
/// Chart/slot contracts the core writes into.
pub mod sink;

pub use controller::{RANK_SLOTS, ViewSync};
pub use frame::FrameBuffer;
pub use sink::{ChartKind, ChartSpec, ChartStyle, RenderSink, SlotStyle};
