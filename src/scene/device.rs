//! Collaborator interfaces the scene graph draws through
//!
//! The scene graph never creates GPU resources itself. A device supplies the
//! viewport and executes draw calls, a shader program receives uniforms, and
//! textures are opaque handles that can be bound. All calls are
//! side-effecting and infallible from the sprite's point of view.

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Uniform names shared with the sprite shader
pub mod uniforms {
    pub const PROJECTION: &str = "projection";
    pub const MODEL: &str = "model";
    pub const SPRITE_COLOR: &str = "spriteColor";
    pub const TEXTURE_0: &str = "image";
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Orthographic projection covering `0..width` × `0..height`
    ///
    /// Depth range is wide enough that z never clips a sprite.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(0.0, self.width, 0.0, self.height, -100.0, 100.0)
    }
}

/// The device/viewport a sprite renders into
pub trait DeviceDelegate {
    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Clear the frame buffer
    fn clear(&self, color: Vec4);

    /// Draw the unit quad with whatever program and uniforms are current
    fn draw_quad(&self);
}

/// A compiled sprite shader program
pub trait ShaderProgram {
    /// Make this program current
    fn use_program(&self);
    fn set_matrix4(&self, name: &str, value: &Mat4);
    fn set_vector3f(&self, name: &str, value: Vec3);
    fn set_integer(&self, name: &str, value: i32);
}

/// A texture handle owned by the renderer
pub trait Texture {
    /// Bind to texture unit 0
    fn bind(&self);
}
