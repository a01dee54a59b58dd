//! Rendering
//!
//! The scene draws through [`FrameRecorder`], which captures each sprite's
//! uniforms as a quad instance. [`QuadPipeline`] replays a recorded frame with
//! WebGPU.

pub mod pipeline;
pub mod quad;
pub mod recorder;

pub use pipeline::QuadPipeline;
pub use quad::{NO_TEXTURE, QuadInstance, QuadVertex, UNIT_QUAD};
pub use recorder::{FrameRecorder, RecordedFrame};
