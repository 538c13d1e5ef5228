use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// The built-in meshes a shape can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeshKind {
    /// Unit cube spanning [0, 1] on every axis.
    Cube,
    /// Radius 1, centered at the origin.
    Sphere,
    /// Radius 1, height 1, centered at the origin, capped.
    Cylinder,
    /// Flat triangle in the XY plane facing -Z.
    Triangle,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Cube,
        MeshKind::Sphere,
        MeshKind::Cylinder,
        MeshKind::Triangle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MeshKind::Cube => "cube",
            MeshKind::Sphere => "sphere",
            MeshKind::Cylinder => "cylinder",
            MeshKind::Triangle => "triangle",
        }
    }

    /// Generate this mesh's geometry.
    pub fn build(&self) -> MeshData {
        match self {
            MeshKind::Cube => cube(),
            MeshKind::Sphere => sphere(32, 16),
            MeshKind::Cylinder => cylinder(32),
            MeshKind::Triangle => triangle(),
        }
    }
}

/// One mesh vertex. `shade` darkens flat colors per face, giving unlit
/// cubes readable edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub shade: f32,
}

impl MeshVertex {
    fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2], shade: f32) -> Self {
        Self {
            position,
            normal,
            uv,
            shade,
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Unit cube with its corner at the origin.
pub fn cube() -> MeshData {
    let v = MeshVertex::new;
    #[rustfmt::skip]
    let vertices = vec![
        // Front (-Z)
        v([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 0.0], 1.0),
        v([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0], 1.0),
        v([1.0, 1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 1.0], 1.0),
        v([0.0, 1.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0], 1.0),
        // Top (+Y)
        v([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0], 0.9),
        v([1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0], 0.9),
        v([1.0, 1.0, 1.0], [0.0, 1.0, 0.0], [1.0, 1.0], 0.9),
        v([0.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 1.0], 0.9),
        // Right (+X)
        v([1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0], 0.8),
        v([1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 0.0], 0.8),
        v([1.0, 1.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0], 0.8),
        v([1.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0], 0.8),
        // Back (+Z)
        v([1.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0], 0.7),
        v([0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0], 0.7),
        v([0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 1.0], 0.7),
        v([1.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 1.0], 0.7),
        // Left (-X)
        v([0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, 0.0], 0.6),
        v([0.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [1.0, 0.0], 0.6),
        v([0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [1.0, 1.0], 0.6),
        v([0.0, 1.0, 1.0], [-1.0, 0.0, 0.0], [0.0, 1.0], 0.6),
        // Bottom (-Y)
        v([0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [0.0, 0.0], 0.9),
        v([1.0, 0.0, 1.0], [0.0, -1.0, 0.0], [1.0, 0.0], 0.9),
        v([1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [1.0, 1.0], 0.9),
        v([0.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 1.0], 0.9),
    ];
    let indices = (0..6u32)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b + 2, b + 3, b]
        })
        .collect();
    MeshData { vertices, indices }
}

/// Latitude/longitude sphere.
pub fn sphere(segments: u32, rings: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();
        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            let p = [ring_radius * theta.cos(), y, ring_radius * theta.sin()];
            let uv = [seg as f32 / segments as f32, ring as f32 / rings as f32];
            vertices.push(MeshVertex::new(p, p, uv, 1.0));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;
            indices.extend_from_slice(&[current, next, current + 1, current + 1, next, next + 1]);
        }
    }

    MeshData { vertices, indices }
}

/// Capped cylinder along Y.
pub fn cylinder(segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let ring = |seg: u32| {
        let theta = 2.0 * PI * seg as f32 / segments as f32;
        (theta.cos(), theta.sin())
    };

    // Side: a strip of quads with outward normals.
    for seg in 0..=segments {
        let (x, z) = ring(seg);
        let u = seg as f32 / segments as f32;
        mesh.vertices.push(MeshVertex::new([x, -0.5, z], [x, 0.0, z], [u, 0.0], 1.0));
        mesh.vertices.push(MeshVertex::new([x, 0.5, z], [x, 0.0, z], [u, 1.0], 1.0));
    }
    for seg in 0..segments {
        let b = seg * 2;
        mesh.indices.extend_from_slice(&[b, b + 2, b + 1, b + 1, b + 2, b + 3]);
    }

    // Caps: a center vertex fanned to the rim.
    for (y, ny) in [(0.5_f32, 1.0_f32), (-0.5, -1.0)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(MeshVertex::new([0.0, y, 0.0], [0.0, ny, 0.0], [0.5, 0.5], 1.0));
        for seg in 0..=segments {
            let (x, z) = ring(seg);
            mesh.vertices.push(MeshVertex::new(
                [x, y, z],
                [0.0, ny, 0.0],
                [0.5 + x * 0.5, 0.5 + z * 0.5],
                1.0,
            ));
        }
        for seg in 0..segments {
            mesh.indices.extend_from_slice(&[center, center + 1 + seg, center + 2 + seg]);
        }
    }

    mesh
}

/// Single triangle used for surface patterns.
pub fn triangle() -> MeshData {
    let n = [0.0, 0.0, -1.0];
    MeshData {
        vertices: vec![
            MeshVertex::new([0.0, 0.0, 0.0], n, [0.0, 0.0], 1.0),
            MeshVertex::new([1.0, 0.0, 0.0], n, [1.0, 0.0], 1.0),
            MeshVertex::new([0.5, 1.0, 0.0], n, [0.5, 1.0], 1.0),
        ],
        indices: vec![0, 1, 2],
    }
}
