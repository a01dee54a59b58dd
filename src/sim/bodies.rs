//! Game bodies: ball, paddle and bricks
//!
//! Each body owns a sprite by value and only the capabilities it needs. The
//! ball and paddle add a `Motion` (bounce and clamp policy respectively), the
//! brick adds its crashed flag.

use glam::Vec2;

use super::collision::{Circle, Rect};
use super::movement::{Motion, MovePolicy, Movable};
use crate::consts::DEFAULT_COLLISION_RADIUS;
use crate::error::SceneError;
use crate::scene::{Renderable, Sprite};

/// The ball: a bouncing sprite with a circular collider
#[derive(Debug)]
pub struct Ball {
    sprite: Sprite,
    motion: Motion,
    collision_radius: Option<f32>,
}

impl Ball {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            motion: Motion::new(MovePolicy::Bounce),
            collision_radius: None,
        }
    }

    pub fn set_collision_radius(&mut self, radius: f32) {
        self.collision_radius = Some(radius);
    }

    /// Use half the larger sprite dimension as the collision radius
    pub fn fit_collision_radius(&mut self) {
        self.set_collision_radius(self.sprite.width().max(self.sprite.height()) / 2.0);
    }

    pub fn collision_radius(&self) -> f32 {
        self.collision_radius.unwrap_or(DEFAULT_COLLISION_RADIUS)
    }

    pub fn collider(&self) -> Circle {
        Circle {
            center: self.sprite.center(),
            radius: self.collision_radius(),
        }
    }
}

impl Renderable for Ball {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Movable for Ball {
    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}

/// The paddle: a clamped sprite driven by input
#[derive(Debug)]
pub struct Paddle {
    sprite: Sprite,
    motion: Motion,
}

impl Paddle {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            motion: Motion::new(MovePolicy::Clamp),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::of(&self.sprite)
    }
}

impl Renderable for Paddle {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

impl Movable for Paddle {
    fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }
}

/// A brick. Once crashed it never draws or collides again.
#[derive(Debug)]
pub struct Brick {
    sprite: Sprite,
    crashed: bool,
}

impl Brick {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            crashed: false,
        }
    }

    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    pub fn crash(&mut self) {
        self.crashed = true;
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    pub fn bounds(&self) -> Rect {
        Rect::of(&self.sprite)
    }

    /// Bottom-left corner in viewport space
    pub fn position(&self) -> Vec2 {
        self.sprite.position().truncate()
    }
}

impl Renderable for Brick {
    fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    fn render(&self) -> Result<(), SceneError> {
        if self.crashed {
            return Ok(());
        }
        self.sprite.render()
    }
}
