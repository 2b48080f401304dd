use std::path::Path;

use crate::error::ConfigError;

/// Game configuration, loadable from TOML.
///
/// The board dimensions feed [`crate::game::GameSession`]. The two
/// durations belong to the driver that owns timing — the opponent's
/// response delay and the match countdown — and are only transported here
/// so they are configurable rather than hard-coded.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub opponent_delay_secs: f32,
    pub match_duration_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 6,
            cols: 7,
            opponent_delay_secs: 0.5,
            match_duration_secs: 120.0,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 4 {
            return Err(ConfigError::Validation(
                "rows must be >= 4 to fit a four-in-a-row".into(),
            ));
        }
        if self.cols < 4 {
            return Err(ConfigError::Validation(
                "cols must be >= 4 to fit a four-in-a-row".into(),
            ));
        }
        if self.opponent_delay_secs < 0.0 {
            return Err(ConfigError::Validation(
                "opponent_delay_secs must be >= 0".into(),
            ));
        }
        if self.match_duration_secs <= 0.0 {
            return Err(ConfigError::Validation(
                "match_duration_secs must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
