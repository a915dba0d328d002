//! Frame timing.
//!
//! One [`FrameClock`] per presentation loop; `tick()` once per presented
//! frame yields the [`FrameTime`] snapshot surfaced to the application.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
