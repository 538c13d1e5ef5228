//! wgpu render backend for the coursework demos.
//!
//! Draws a `cglab_render::Frame`: shapes are grouped by mesh and drawn
//! instanced, then the 2D overlay goes on top without depth testing.
//!
//! # Invariants
//! - The renderer never mutates demo state.
//! - The fragment shader implements the same model as `lighting::shade`.
//! - Frames carry OpenGL-style projections; depth is remapped here.

mod buffers;
mod context;
mod error;
mod gpu;
mod shaders;
pub mod textures;

pub use buffers::{Batch, GpuVertex, InstanceData, OPENGL_TO_WGPU, OverlayVertex, Uniforms, batch_shapes, overlay_vertices};
pub use context::GpuContext;
pub use error::RenderError;
pub use gpu::WgpuRenderer;
