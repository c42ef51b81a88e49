use thiserror::Error;

use crate::models::Position;

#[derive(Error, Debug)]
pub enum HoopsError {
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid player '{name}': {reason}")]
    InvalidPlayer { name: String, reason: String },

    #[error("Duplicate player in pool or game: {0}")]
    DuplicatePlayer(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("{name} is not eligible to play {position}")]
    IneligiblePosition { name: String, position: Position },

    #[error("{name} is not among the current options at {position}")]
    NotOffered { name: String, position: Position },

    #[error("Team {team} must have exactly 5 players, found {found}")]
    RosterSize { team: String, found: usize },

    #[error("No candidates left for {0}")]
    NoCandidates(Position),

    #[error("Lineup for {team} is missing {position}")]
    IncompleteLineup { team: String, position: Position },

    #[error("{team} has already filled {position}")]
    PositionFilled { team: String, position: Position },

    #[error("Draft is already complete")]
    DraftComplete,

    #[error("Draft is not complete: {remaining} picks remaining")]
    DraftIncomplete { remaining: usize },

    #[error("Schema version mismatch: found {found}, expected {expected}")]
    SchemaMismatch { found: u8, expected: u8 },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HoopsError {
    /// Errors a user can fix by re-entering input at a draft prompt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HoopsError::PlayerNotFound(_)
                | HoopsError::IneligiblePosition { .. }
                | HoopsError::NotOffered { .. }
                | HoopsError::PositionFilled { .. }
                | HoopsError::InvalidPosition(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, HoopsError>;
