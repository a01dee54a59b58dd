//! Transform node: position/rotation/scale to model matrix
//!
//! A sprite is drawn as the unit quad `[0,1]²`. The model matrix applies, from
//! the inside out: scale (stretch the quad to width×height), rotation about
//! `origin`, translation to `position` in viewport space.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Position, rotation and scale of a single scene node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Bottom-left corner of the node in viewport pixels
    pub position: Vec3,
    /// Rotation about the z axis (radians, counter-clockwise)
    pub rotation: f32,
    /// Per-axis scale applied to the unit quad
    pub scale: Vec3,
    /// Rotation pivot, relative to `position` in viewport pixels
    pub origin: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            scale: Vec3::ONE,
            origin: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Compute the model matrix for the current state.
    ///
    /// Not cached: positions change every frame, so this is evaluated once per
    /// render call.
    pub fn compute_model_mat(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_translation(self.origin)
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_translation(-self.origin)
            * Mat4::from_scale(self.scale)
    }
}
