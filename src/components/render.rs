// src/components/render.rs
// Renderer-facing components. The core never touches GPU resources: a Mesh
// is a description the renderer turns into buffers on its side of the
// boundary.

use glam::Vec3;

/// Shape of a visual mesh, in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Flat quad on the XZ plane, centered at the origin.
    Plane { width: f32, depth: f32 },
    /// Cube centered at the origin.
    Cube { size: f32 },
    /// UV sphere of unit radius.
    Sphere { rings: u32, segments: u32 },
}

/// Visual description attached to renderable entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub primitive: Primitive,
    pub color: Vec3,
}

impl Mesh {
    pub fn new(primitive: Primitive, color: Vec3) -> Self {
        Self { primitive, color }
    }
}

/// Point light parameters; position comes from the entity's `Transform`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}
