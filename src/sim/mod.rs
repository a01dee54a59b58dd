//! Breakout simulation
//!
//! Bodies, movement, collision and the per-frame session driver. Everything
//! here is deterministic given the same inputs and seed:
//! - One fixed step per tick, velocities in pixels per tick
//! - Seeded RNG only
//! - Stable iteration order (brick creation order)

pub mod bodies;
pub mod collision;
pub mod level;
pub mod movement;
pub mod session;

pub use bodies::{Ball, Brick, Paddle};
pub use collision::{Circle, Rect, check_collision, vector_direction};
pub use level::{BrickPlacement, Level, brick_color, layout_bricks};
pub use movement::{Motion, MovePolicy, Movable, PositionLimits};
pub use session::{GameSession, RunState};
