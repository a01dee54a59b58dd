//! Level data and brick layout
//!
//! A level is a flat list of brick codes read row by row, `row_count` cells
//! per row. Code 0 is an empty cell; 1..=3 are coloured bricks. Any other code
//! means the level is corrupt and the session must not start.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Brick codes for one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub describe: String,
    pub brick_config: Vec<u8>,
    /// Cells per row
    pub row_count: usize,
}

#[rustfmt::skip]
const LEVEL_1_BRICKS: [u8; 75] = [
    1, 1, 1, 1, 1, 0, 2, 2, 2, 2, 1, 1, 1, 1, 1,
    1, 1, 1, 3, 1, 1, 2, 0, 0, 2, 1, 1, 1, 1, 1,
    1, 1, 1, 0, 1, 1, 0, 0, 0, 2, 1, 0, 0, 1, 1,
    1, 2, 2, 0, 1, 2, 0, 2, 0, 2, 1, 0, 0, 0, 1,
    1, 3, 3, 3, 1, 1, 0, 2, 0, 0, 3, 3, 3, 0, 0,
];

impl Level {
    pub fn new(describe: impl Into<String>, brick_config: Vec<u8>, row_count: usize) -> Self {
        Self {
            describe: describe.into(),
            brick_config,
            row_count,
        }
    }

    /// The built-in first level
    pub fn level_1() -> Self {
        Self::new("Level 1", LEVEL_1_BRICKS.to_vec(), 15)
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(|e| LevelError::Malformed(e.to_string()))
    }

    /// Number of (possibly partial) rows
    pub fn rows(&self) -> usize {
        if self.row_count == 0 {
            return 0;
        }
        self.brick_config.len().div_ceil(self.row_count)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::level_1()
    }
}

/// Colour for a brick code, `None` for unknown codes
pub fn brick_color(code: u8) -> Option<Vec3> {
    match code {
        1 => Some(Vec3::new(1.0, 0.0, 0.0)),
        2 => Some(Vec3::new(0.0, 1.0, 0.0)),
        3 => Some(Vec3::new(0.0, 0.0, 1.0)),
        _ => None,
    }
}

/// One brick to create: its cell in the grid and its colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickPlacement {
    /// Index into the level's brick list
    pub index: usize,
    pub column: usize,
    /// Row 0 is the top row
    pub row: usize,
    pub color: Vec3,
}

impl BrickPlacement {
    /// Bottom-left corner in a viewport of height `viewport_height`
    pub fn position(&self, brick_size: Vec2, viewport_height: f32) -> Vec3 {
        Vec3::new(
            self.column as f32 * brick_size.x,
            viewport_height - (self.row as f32 + 1.0) * brick_size.y,
            0.0,
        )
    }
}

/// Turn level data into brick placements, skipping empty cells.
///
/// Validates every cell before returning, so a corrupt level produces no
/// bricks at all.
pub fn layout_bricks(level: &Level) -> Result<Vec<BrickPlacement>, LevelError> {
    if level.brick_config.is_empty() {
        return Err(LevelError::Empty);
    }
    if level.row_count == 0 {
        return Err(LevelError::ZeroRowCount);
    }

    let mut placements = Vec::new();
    for (index, &code) in level.brick_config.iter().enumerate() {
        if code == 0 {
            continue;
        }
        let color = brick_color(code).ok_or(LevelError::UnknownBrickCode { index, code })?;
        placements.push(BrickPlacement {
            index,
            column: index % level.row_count,
            row: index / level.row_count,
            color,
        });
    }
    Ok(placements)
}
