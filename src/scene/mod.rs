//! Scene graph module
//!
//! Transform nodes and the sprites built on them. Drawing is delegated to the
//! device and shader collaborators in [`device`].

pub mod device;
pub mod sprite;
pub mod transform;

pub use device::{DeviceDelegate, ShaderProgram, Texture, Viewport};
pub use sprite::{Direction, DirectionInfo, Renderable, Sprite, SpriteOptions, direction_infos};
pub use transform::Transform;
