//! Vertex and instance types for the sprite quad

use bytemuck::{Pod, Zeroable};

/// Texture id meaning "no texture bound"
pub const NO_TEXTURE: u32 = u32::MAX;

/// Unit-quad vertex: position and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl QuadVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Two triangles covering `[0,1]²`; the model matrix scales it to sprite size
pub const UNIT_QUAD: [QuadVertex; 6] = [
    QuadVertex::new(0.0, 1.0, 0.0, 1.0),
    QuadVertex::new(1.0, 0.0, 1.0, 0.0),
    QuadVertex::new(0.0, 0.0, 0.0, 0.0),
    QuadVertex::new(0.0, 1.0, 0.0, 1.0),
    QuadVertex::new(1.0, 1.0, 1.0, 1.0),
    QuadVertex::new(1.0, 0.0, 1.0, 0.0),
];

/// One recorded draw call: the uniforms a sprite uploaded before drawing
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    /// Bound texture id, or [`NO_TEXTURE`]
    pub texture: u32,
}

impl QuadInstance {
    pub fn is_textured(&self) -> bool {
        self.texture != NO_TEXTURE
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x3,
        7 => Uint32,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
