//! Citrine engine crate.
//!
//! This crate owns the platform + GPU runtime pieces of the citrine harness:
//! a winit-driven window loop, a wgpu device/surface layer, and the fixed
//! two-stage triangle pipeline the harness exists to host.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod shader;
pub mod render;
