use std::path::PathBuf;

/// Errors from board mutations and session moves. All are recoverable: the
/// board and session are left unchanged, and the driver simply keeps
/// waiting for a usable move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (board has {cols} columns)")]
    InvalidColumn { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors from opponent move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// Every column is full. The driver should already have ended the
    /// session by this point; treat it as a forced draw, not a crash.
    #[error("no legal column to play (board is full)")]
    NoLegalMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { col: 9, cols: 7 };
        assert_eq!(
            err.to_string(),
            "column 9 is out of range (board has 7 columns)"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
    }

    #[test]
    fn test_policy_error_display() {
        assert_eq!(
            PolicyError::NoLegalMove.to_string(),
            "no legal column to play (board is full)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be >= 4".to_string());
        assert_eq!(err.to_string(), "config validation error: rows must be >= 4");
    }
}
