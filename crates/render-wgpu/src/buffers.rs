//! CPU-side layouts of everything uploaded to the GPU.

use bytemuck::{Pod, Zeroable};
use cglab_common::matrix::normal_matrix;
use cglab_render::lighting::{SHININESS, SPECULAR_STRENGTH, SPOT_OUTSIDE_FACTOR};
use cglab_render::{Frame, MeshKind, MeshVertex, Overlay, Shape, Surface};
use glam::Mat4;
use std::ops::Range;

/// Maps OpenGL clip depth (-1..1) onto wgpu's (0..1).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
]);

/// Per-frame uniforms. Every field is 16-byte aligned to match WGSL.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub global: [[f32; 4]; 4],
    pub eye: [f32; 4],
    /// lighting enabled, has point, has directional, has spot
    pub flags: [u32; 4],
    /// ambient, shininess, specular strength, outside-spot factor
    pub params: [f32; 4],
    pub point_position: [f32; 4],
    /// rgb, intensity
    pub point_color: [f32; 4],
    pub dir_direction: [f32; 4],
    /// rgb, intensity
    pub dir_color: [f32; 4],
    /// direction, cutoff cosine
    pub spot: [f32; 4],
}

impl Uniforms {
    pub fn from_frame(frame: &Frame) -> Self {
        let l = &frame.lighting;
        let mut u = Self {
            view_proj: (OPENGL_TO_WGPU * frame.projection * frame.view).to_cols_array_2d(),
            global: frame.global_rotation.to_cols_array_2d(),
            eye: frame.eye.extend(1.0).to_array(),
            flags: [
                l.enabled as u32,
                l.point.is_some() as u32,
                l.directional.is_some() as u32,
                l.spot.is_some() as u32,
            ],
            params: [l.ambient, SHININESS, SPECULAR_STRENGTH, SPOT_OUTSIDE_FACTOR],
            ..Self::zeroed()
        };
        if let Some(p) = l.point {
            u.point_position = p.position.extend(1.0).to_array();
            let [r, g, b] = p.color.rgb_array();
            u.point_color = [r, g, b, p.intensity];
        }
        if let Some(d) = l.directional {
            u.dir_direction = d.direction.extend(0.0).to_array();
            let [r, g, b] = d.color.rgb_array();
            u.dir_color = [r, g, b, d.intensity];
        }
        if let Some(s) = l.spot {
            u.spot = s.direction.extend(s.cutoff).to_array();
        }
        u
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub shade: f32,
}

impl From<&MeshVertex> for GpuVertex {
    fn from(v: &MeshVertex) -> Self {
        Self {
            position: v.position,
            normal: v.normal,
            uv: v.uv,
            shade: v.shade,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    /// Columns of the 3x3 normal matrix, padded to vec4.
    pub normal: [[f32; 4]; 3],
    pub color: [f32; 4],
    /// surface code, texture layer, lit, specular
    pub params: [u32; 4],
}

impl InstanceData {
    pub fn from_shape(shape: &Shape) -> Self {
        let n = normal_matrix(shape.model);
        let m = &shape.material;
        let layer = match m.surface {
            Surface::Texture(slot) => slot.layer(),
            _ => 0,
        };
        Self {
            model: shape.model.to_cols_array_2d(),
            normal: [
                n.x_axis.extend(0.0).to_array(),
                n.y_axis.extend(0.0).to_array(),
                n.z_axis.extend(0.0).to_array(),
            ],
            color: m.color.to_array(),
            params: [m.surface.code(), layer, m.lit as u32, m.specular as u32],
        }
    }
}

/// A run of instances sharing one mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub mesh: MeshKind,
    pub instances: Range<u32>,
}

/// Group shapes by mesh, keeping frame order within each group.
pub fn batch_shapes(shapes: &[Shape]) -> (Vec<InstanceData>, Vec<Batch>) {
    let mut instances = Vec::with_capacity(shapes.len());
    let mut batches = Vec::new();
    for mesh in MeshKind::ALL {
        let start = instances.len() as u32;
        instances.extend(
            shapes
                .iter()
                .filter(|s| s.mesh == mesh)
                .map(InstanceData::from_shape),
        );
        let end = instances.len() as u32;
        if end > start {
            batches.push(Batch {
                mesh,
                instances: start..end,
            });
        }
    }
    (instances, batches)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Triangle-list and line-list vertices for the overlay.
pub fn overlay_vertices(overlay: &Overlay) -> (Vec<OverlayVertex>, Vec<OverlayVertex>) {
    let triangles = overlay
        .triangles
        .iter()
        .flat_map(|t| {
            let color = t.color.to_array();
            t.points.map(|p| OverlayVertex {
                position: p.to_array(),
                color,
            })
        })
        .collect();
    let lines = overlay
        .lines
        .iter()
        .flat_map(|l| {
            let color = l.color.to_array();
            [l.from, l.to].map(|p| OverlayVertex {
                position: p.to_array(),
                color,
            })
        })
        .collect();
    (triangles, lines)
}
