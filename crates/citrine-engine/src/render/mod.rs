//! GPU rendering subsystem.
//!
//! The renderer issues GPU commands via wgpu and is responsible for its own
//! resources (pipeline, vertex buffer). Clearing the frame belongs to the
//! frame context; the renderer loads what is already there.

mod ctx;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::{TRIANGLE_VERTICES, TriangleRenderer, Vertex};
