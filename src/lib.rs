//! Sprite Breakout - a 2D sprite scene graph with a ball-and-paddle game on top
//!
//! Core modules:
//! - `scene`: Transform nodes, sprites and the device/shader interfaces
//! - `sim`: Bodies, movement, collision and the frame driver
//! - `renderer`: Draw-call recording and the WebGPU quad pipeline
//! - `assets`: Two-phase image loading
//! - `platform`: Browser image loader
//! - `settings`: Game configuration

pub mod assets;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use assets::{AssetLoader, AssetTicket, LoadedImage, MemoryAssets};
pub use error::{AssetError, LevelError, SceneError};
pub use settings::GameConfig;
pub use sim::{GameSession, Level, RunState};

/// Game constants
pub mod consts {
    /// Ball collision radius when none was set or fitted
    pub const DEFAULT_COLLISION_RADIUS: f32 = 10.0;

    /// Viewport used by the headless native build
    pub const HEADLESS_WIDTH: f32 = 800.0;
    pub const HEADLESS_HEIGHT: f32 = 600.0;
    /// Ticks simulated by the headless native build
    pub const HEADLESS_TICKS: u32 = 600;
}
