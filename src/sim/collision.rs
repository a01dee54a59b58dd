//! Circle vs. axis-aligned rectangle collision
//!
//! Closed form, no iteration: measure how far the rectangle's boundary lies
//! from its center along the center-to-center offset, add the circle's
//! radius, and compare with the offset length. A hit is then classified by
//! which edge the offset points through.

use glam::Vec2;

use crate::scene::{Direction, DirectionInfo, Sprite, direction_infos};

/// Trig terms below this are treated as zero (the quotient becomes infinite)
const TRIG_EPSILON: f32 = 1e-6;

/// A circular mover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// An axis-aligned rectangular target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Bounding box of a sprite
    pub fn of(sprite: &Sprite) -> Self {
        Self {
            center: sprite.center(),
            width: sprite.width(),
            height: sprite.height(),
        }
    }

    pub fn direction_infos(&self) -> [DirectionInfo; 4] {
        direction_infos(self.width, self.height)
    }

    /// Distance from the center to the boundary along a direction with the
    /// given |cos| and |sin|.
    fn inner_len(&self, abs_cos: f32, abs_sin: f32) -> f32 {
        let along_x = half_over(self.width, abs_cos);
        let along_y = half_over(self.height, abs_sin);
        along_x.min(along_y)
    }
}

/// `extent / (2·trig)`, infinite when the trig term vanishes
#[inline]
fn half_over(extent: f32, trig: f32) -> f32 {
    if trig <= TRIG_EPSILON {
        f32::INFINITY
    } else {
        extent / (2.0 * trig)
    }
}

/// Test a circle against a rectangle.
///
/// Returns the struck edge, or `None` when there is no contact. Coincident
/// centers count as a hit on `Up`.
pub fn check_collision(mover: &Circle, target: &Rect) -> Option<Direction> {
    let offset = mover.center - target.center;
    let distance = offset.length();

    if distance <= f32::EPSILON {
        return Some(Direction::Up);
    }

    let abs_cos = (offset.dot(Vec2::X) / distance).abs().min(1.0);
    let abs_sin = (1.0 - abs_cos * abs_cos).max(0.0).sqrt();
    let inner_len = target.inner_len(abs_cos, abs_sin);

    if inner_len + mover.radius < distance {
        return None;
    }

    vector_direction(offset / distance, &target.direction_infos())
}

/// First entry whose edge normal makes at least `min_cos` with `unit`.
///
/// `unit` must be normalized. `None` only happens when rounding puts the
/// vector exactly between two edges.
pub fn vector_direction(unit: Vec2, infos: &[DirectionInfo]) -> Option<Direction> {
    infos
        .iter()
        .find(|info| info.vec.dot(unit) >= info.min_cos)
        .map(|info| info.dir)
}
