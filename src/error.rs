//! Error types for the scene graph, level construction and asset loading
//!
//! Nothing here is retried. Scene and level errors are contract violations
//! that abort the call or the session setup; asset errors only keep the
//! affected body out of the live set.

/// Precondition failures raised by sprites before or during a render.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    MissingShader,                          // render() without a shader attached.
    MissingDevice,                          // render()/move() without a device attached.
    InvalidSize { width: f32, height: f32 }, // Sprite size must be finite and positive.
}

impl std::error::Error for SceneError {}
impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::MissingShader => write!(f, "Shader must be attached before rendering"),
            SceneError::MissingDevice => write!(f, "Device must be attached before use"),
            SceneError::InvalidSize { width, height } => {
                write!(f, "Invalid sprite size {width}x{height}, both must be positive")
            }
        }
    }
}

/// Level data that cannot be turned into a brick layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    Empty,                                   // No brick data at all.
    ZeroRowCount,                            // Cells per row must be at least one.
    UnknownBrickCode { index: usize, code: u8 }, // Non-zero code with no colour.
    Malformed(String),                       // JSON level that failed to parse.
}

impl std::error::Error for LevelError {}
impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Empty => write!(f, "Level has no brick data"),
            LevelError::ZeroRowCount => write!(f, "Level row count must be positive"),
            LevelError::UnknownBrickCode { index, code } => {
                write!(f, "No brick colour for code {code} at cell {index}")
            }
            LevelError::Malformed(why) => write!(f, "Malformed level data: {why}"),
        }
    }
}

/// Failure to load an image a body depends on.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    NotFound(String),                      // No such asset.
    Failed { url: String, reason: String }, // Fetch or decode failed.
}

impl std::error::Error for AssetError {}
impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::NotFound(url) => write!(f, "Asset not found: {url}"),
            AssetError::Failed { url, reason } => write!(f, "Failed to load {url}: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = LevelError::UnknownBrickCode { index: 4, code: 9 };
        assert_eq!(err.to_string(), "No brick colour for code 9 at cell 4");

        let err = AssetError::NotFound("ball.png".into());
        assert!(err.to_string().contains("ball.png"));

        let err = SceneError::InvalidSize {
            width: 0.0,
            height: 3.0,
        };
        assert!(err.to_string().contains("0x3"));
    }
}
