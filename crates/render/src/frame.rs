use crate::lighting::Lighting;
use crate::mesh::MeshKind;
use cglab_common::{Color, ModelMatrix};
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Procedurally generated texture layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TextureSlot {
    Sky,
    Grass,
    Dirt,
    Block,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 4] = [
        TextureSlot::Sky,
        TextureSlot::Grass,
        TextureSlot::Dirt,
        TextureSlot::Block,
    ];

    /// Layer index in the texture array.
    pub fn layer(&self) -> u32 {
        match self {
            TextureSlot::Sky => 0,
            TextureSlot::Grass => 1,
            TextureSlot::Dirt => 2,
            TextureSlot::Block => 3,
        }
    }
}

/// Where a shape's base color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Color,
    UvDebug,
    Normal,
    Texture(TextureSlot),
}

impl Surface {
    /// Code consumed by the fragment shader.
    pub fn code(&self) -> u32 {
        match self {
            Surface::Color => 0,
            Surface::UvDebug => 1,
            Surface::Normal => 2,
            Surface::Texture(_) => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    pub surface: Surface,
    pub lit: bool,
    pub specular: bool,
}

impl Material {
    /// Unlit flat color.
    pub fn flat(color: Color) -> Self {
        Self {
            color,
            surface: Surface::Color,
            lit: false,
            specular: false,
        }
    }

    /// Unlit texture.
    pub fn textured(slot: TextureSlot) -> Self {
        Self {
            surface: Surface::Texture(slot),
            ..Self::flat(Color::WHITE)
        }
    }

    pub fn lit(mut self) -> Self {
        self.lit = true;
        self
    }

    pub fn with_specular(mut self) -> Self {
        self.specular = true;
        self
    }

    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }
}

/// One drawable: a mesh placed by a model matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub material: Material,
}

impl Shape {
    pub fn new(mesh: MeshKind, model: impl Into<Mat4>, material: Material) -> Self {
        Self {
            mesh,
            model: model.into(),
            material,
        }
    }

    pub fn cube(model: ModelMatrix, material: Material) -> Self {
        Self::new(MeshKind::Cube, model, material)
    }

    /// World-space position of the mesh origin.
    pub fn origin(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Flat-colored triangle in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatTriangle {
    pub points: [Vec2; 3],
    pub color: Color,
}

/// Flat-colored line segment in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatLine {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// 2D primitives drawn after the shapes, without depth testing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub triangles: Vec<FlatTriangle>,
    pub lines: Vec<FlatLine>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty() && self.lines.is_empty()
    }

    /// Triangulate a convex fan `p0, p1, .., pn`.
    pub fn push_fan(&mut self, points: &[Vec2], color: Color) {
        if let Some((&first, rest)) = points.split_first() {
            for pair in rest.windows(2) {
                self.triangles.push(FlatTriangle {
                    points: [first, pair[0], pair[1]],
                    color,
                });
            }
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color,
    pub view: Mat4,
    pub projection: Mat4,
    pub global_rotation: Mat4,
    /// Camera position, for specular highlights.
    pub eye: Vec3,
    pub lighting: Lighting,
    pub shapes: Vec<Shape>,
    pub overlay: Overlay,
    /// Text the demo wants shown next to the frame.
    pub annotations: Vec<String>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl Frame {
    /// Frame with identity matrices, i.e. shapes are already in clip space.
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            global_rotation: Mat4::IDENTITY,
            eye: Vec3::ZERO,
            lighting: Lighting::off(),
            shapes: Vec::new(),
            overlay: Overlay::default(),
            annotations: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn summary(&self) -> FrameSummary {
        let mut meshes = BTreeMap::new();
        for shape in &self.shapes {
            *meshes.entry(shape.mesh.name().to_string()).or_insert(0) += 1;
        }
        FrameSummary {
            clear_color: self.clear_color,
            eye: self.eye.to_array(),
            lighting: self.lighting.enabled,
            shape_count: self.shapes.len(),
            meshes,
            overlay_triangles: self.overlay.triangles.len(),
            overlay_lines: self.overlay.lines.len(),
            shapes: self.shapes.iter().map(ShapeRecord::from).collect(),
            annotations: self.annotations.clone(),
        }
    }
}

/// Serializable digest of a frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSummary {
    pub clear_color: Color,
    pub eye: [f32; 3],
    pub lighting: bool,
    pub shape_count: usize,
    pub meshes: BTreeMap<String, usize>,
    pub overlay_triangles: usize,
    pub overlay_lines: usize,
    pub shapes: Vec<ShapeRecord>,
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapeRecord {
    pub mesh: MeshKind,
    pub origin: [f32; 3],
    pub color: Color,
    pub surface: Surface,
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        Self {
            mesh: shape.mesh,
            origin: shape.origin().to_array(),
            color: shape.material.color,
            surface: shape.material.surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_is_identity() {
        let frame = Frame::new(Color::WHITE);
        assert_eq!(frame.projection * frame.view * frame.global_rotation, Mat4::IDENTITY);
        let shape = Shape::cube(ModelMatrix::identity().translate(1.0, 2.0, 3.0), Material::flat(Color::RED));
        assert_eq!(shape.origin(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn fan_triangulation() {
        let mut overlay = Overlay::default();
        let pts = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        overlay.push_fan(&pts, Color::GREEN);
        assert_eq!(overlay.triangles.len(), 2);
        assert_eq!(overlay.triangles[1].points, [Vec2::ZERO, Vec2::ONE, Vec2::Y]);
        overlay.push_fan(&pts[..2], Color::GREEN);
        assert_eq!(overlay.triangles.len(), 2);
    }

    #[test]
    fn summary_counts_meshes() {
        let mut frame = Frame::default();
        frame.push(Shape::cube(ModelMatrix::identity(), Material::flat(Color::RED)));
        frame.push(Shape::cube(ModelMatrix::identity(), Material::textured(TextureSlot::Dirt)));
        frame.push(Shape::new(MeshKind::Sphere, Mat4::IDENTITY, Material::flat(Color::RED)));
        let summary = frame.summary();
        assert_eq!(summary.shape_count, 3);
        assert_eq!(summary.meshes["cube"], 2);
        assert_eq!(summary.meshes["sphere"], 1);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"Dirt\""));
    }

    #[test]
    fn texture_layers_are_distinct() {
        let mut layers: Vec<u32> = TextureSlot::ALL.iter().map(|s| s.layer()).collect();
        layers.dedup();
        assert_eq!(layers, vec![0, 1, 2, 3]);
    }
}
