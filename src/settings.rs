//! Game configuration
//!
//! Tunables that used to be hard-coded: body sizes, speeds, key bindings and
//! asset URLs. Persisted as JSON in LocalStorage on the web, read from a file
//! path natively.

use serde::{Deserialize, Serialize};

/// Keys mapped to paddle movement and the run/idle toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub toggle: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into(), "a".into()],
            right: vec!["ArrowRight".into(), "d".into()],
            toggle: vec![" ".into()],
        }
    }
}

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    Toggle,
}

impl KeyBindings {
    pub fn action(&self, key: &str) -> Option<KeyAction> {
        let bound = |keys: &[String]| keys.iter().any(|k| k == key);
        if bound(&self.left) {
            Some(KeyAction::Left)
        } else if bound(&self.right) {
            Some(KeyAction::Right)
        } else if bound(&self.toggle) {
            Some(KeyAction::Toggle)
        } else {
            None
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ball velocity at start (pixels per tick)
    pub ball_velocity: [f32; 2],
    /// Paddle speed while a direction key is held (pixels per tick)
    pub paddle_speed: f32,
    /// Paddle width as a fraction of viewport width
    pub paddle_width_ratio: f32,
    /// Paddle height as a fraction of its width
    pub paddle_aspect: f32,
    /// Brick height as a fraction of its width
    pub brick_aspect: f32,
    /// Frame clear colour (RGBA)
    pub clear_color: [f32; 4],
    /// Seed for the ball colour
    pub seed: u64,
    pub keys: KeyBindings,

    // === Assets ===
    pub ball_image: String,
    pub paddle_image: String,
    pub brick_image: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ball_velocity: [2.0, 2.0],
            paddle_speed: 2.0,
            paddle_width_ratio: 0.1,
            paddle_aspect: 0.3,
            brick_aspect: 0.6,
            clear_color: [0.7, 0.7, 0.7, 1.0],
            seed: 0x5eed,
            keys: KeyBindings::default(),

            ball_image: "assets/awesomeface.png".into(),
            paddle_image: "assets/paddle.png".into(),
            brick_image: "assets/block.png".into(),
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "sprite_breakout_config";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {e}"),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load config from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_actions() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action("ArrowLeft"), Some(KeyAction::Left));
        assert_eq!(keys.action("a"), Some(KeyAction::Left));
        assert_eq!(keys.action("d"), Some(KeyAction::Right));
        assert_eq!(keys.action(" "), Some(KeyAction::Toggle));
        assert_eq!(keys.action("q"), None);
    }

    #[test]
    fn test_load_from_missing_or_bad_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("sprite_breakout_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let missing = dir.join("missing.json");
        assert_eq!(GameConfig::load_from(&missing), GameConfig::default());

        let bad = dir.join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert_eq!(GameConfig::load_from(&bad), GameConfig::default());

        let good = dir.join("good.json");
        std::fs::write(&good, r#"{"seed": 9}"#).unwrap();
        assert_eq!(GameConfig::load_from(&good).seed, 9);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"paddle_speed": 5.0}"#).unwrap();
        assert_eq!(config.paddle_speed, 5.0);
        assert_eq!(config.ball_velocity, [2.0, 2.0]);
        assert_eq!(config.keys, KeyBindings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = GameConfig::default();
        config.seed = 42;
        config.keys.toggle.push("Enter".into());
        let json = config.to_json().unwrap();
        let parsed = GameConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
