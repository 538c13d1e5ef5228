//! Rendering adapter: renderer-agnostic description of one frame.
//!
//! Demos rebuild a `Frame` from scratch every tick: a list of shapes (mesh,
//! model matrix, material), 2D overlay primitives, camera matrices and
//! lighting. Renderers only read frames.
//!
//! # Invariants
//! - A frame owns all of its shapes; nothing persists between frames.
//! - Clip position = projection * view * global_rotation * model * vertex.
//! - `lighting::shade` and the GPU fragment shader implement the same model.

pub mod camera;
pub mod frame;
pub mod lighting;
pub mod mesh;
mod renderer;

pub use camera::{LookAtCamera, OrbitCamera};
pub use frame::{
    FlatLine, FlatTriangle, Frame, FrameSummary, Material, Overlay, Shape, Surface, TextureSlot,
};
pub use lighting::{DirectionalLight, Lighting, PointLight, SpotLight};
pub use mesh::{MeshData, MeshKind, MeshVertex};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "cglab-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
