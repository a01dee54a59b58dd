//! Velocity and movement bounds for moving sprites
//!
//! Two policies:
//! - `Clamp`: position is clamped to the limits per axis, velocity untouched
//!   (paddle; the caller zeroes velocity on key release)
//! - `Bounce`: position moves freely, and on reaching a limit it snaps back
//!   onto it and that velocity component flips (ball)

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::scene::{Direction, Renderable, Sprite, Viewport};

/// How a body reacts to its position limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePolicy {
    Clamp,
    Bounce,
}

/// Axis-aligned bounds for a body's position (its bottom-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionLimits {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl PositionLimits {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// From `[min_x, max_x, min_y, max_y]`
    pub const fn from_array([min_x, max_x, min_y, max_y]: [f32; 4]) -> Self {
        Self::new(min_x, max_x, min_y, max_y)
    }

    /// The whole viewport
    pub fn full(viewport: Viewport) -> Self {
        Self::new(0.0, viewport.width, 0.0, viewport.height)
    }

    pub fn contains(&self, position: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }
}

/// Velocity plus bounds of a moving body
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    velocity: Vec2,
    limits: Option<PositionLimits>,
    policy: MovePolicy,
}

impl Motion {
    pub fn new(policy: MovePolicy) -> Self {
        Self {
            velocity: Vec2::ZERO,
            limits: None,
            policy,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_limits(&mut self, limits: PositionLimits) {
        self.limits = Some(limits);
    }

    /// Limits in effect, defaulting once to the full viewport.
    ///
    /// The default is cached, so later viewport changes do not move it.
    pub fn resolve_limits(
        &mut self,
        viewport: Result<Viewport, SceneError>,
    ) -> Result<PositionLimits, SceneError> {
        if let Some(limits) = self.limits {
            return Ok(limits);
        }
        let limits = PositionLimits::full(viewport?);
        self.limits = Some(limits);
        Ok(limits)
    }

    /// Advance `position` by one tick of velocity under this policy
    pub fn advance(&mut self, position: Vec3, limits: PositionLimits) -> Vec3 {
        match self.policy {
            MovePolicy::Clamp => {
                let next = position.truncate() + self.velocity;
                Vec3::new(
                    next.x.max(limits.min_x).min(limits.max_x),
                    next.y.max(limits.min_y).min(limits.max_y),
                    position.z,
                )
            }
            MovePolicy::Bounce => {
                let mut next = position + self.velocity.extend(0.0);

                if next.x <= limits.min_x {
                    next.x = limits.min_x;
                    self.velocity.x = -self.velocity.x;
                } else if next.x >= limits.max_x {
                    next.x = limits.max_x;
                    self.velocity.x = -self.velocity.x;
                }

                if next.y <= limits.min_y {
                    next.y = limits.min_y;
                    self.velocity.y = -self.velocity.y;
                } else if next.y >= limits.max_y {
                    next.y = limits.max_y;
                    self.velocity.y = -self.velocity.y;
                }

                next
            }
        }
    }

    /// Reflect velocity off a body edge
    pub fn rebound(&mut self, direction: Direction) {
        if direction.is_vertical() {
            self.velocity.y = -self.velocity.y;
        } else {
            self.velocity.x = -self.velocity.x;
        }
    }
}

/// A renderable body that moves every tick
pub trait Movable: Renderable {
    fn sprite_mut(&mut self) -> &mut Sprite;
    fn motion(&self) -> &Motion;
    fn motion_mut(&mut self) -> &mut Motion;

    fn velocity(&self) -> Vec2 {
        self.motion().velocity()
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.motion_mut().set_velocity(velocity);
    }

    fn set_position_limits(&mut self, limits: PositionLimits) {
        self.motion_mut().set_limits(limits);
    }

    fn rebound(&mut self, direction: Direction) {
        self.motion_mut().rebound(direction);
    }

    /// Move one tick and return the new position.
    ///
    /// Needs a device only when no limits were set.
    fn step(&mut self) -> Result<Vec3, SceneError> {
        let viewport = self.sprite().viewport();
        let limits = self.motion_mut().resolve_limits(viewport)?;
        let position = self.sprite().position();
        let next = self.motion_mut().advance(position, limits);
        self.sprite_mut().set_position(next);
        Ok(next)
    }
}
