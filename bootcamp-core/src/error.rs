use std::path::PathBuf;

use thiserror::Error;

use crate::profile::MIN_AGE;

/// Reasons a user record can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Name cannot be empty")]
    NameEmpty,
    #[error("Must be at least {minimum} years old (got {age})")]
    AgeTooYoung { age: u32, minimum: u32 },
    #[error("Email must contain @ (got {0:?})")]
    EmailInvalid(String),
    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: i64 },
}

impl UserError {
    pub fn age_too_young(age: u32) -> Self {
        UserError::AgeTooYoung {
            age,
            minimum: MIN_AGE,
        }
    }

    /// Short user-facing sentence without the offending value.
    pub fn message(&self) -> String {
        match self {
            UserError::NameEmpty => "Name cannot be empty".to_string(),
            UserError::AgeTooYoung { minimum, .. } => {
                format!("Must be at least {minimum} years old")
            }
            UserError::EmailInvalid(_) => "Email must contain @".to_string(),
            UserError::OutOfRange { field, .. } => format!("{field} is out of range"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("score must be between 0 and 100, got {0}")]
    ScoreOutOfRange(i64),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Grade(#[from] GradeError),
    #[error("failed to read roster: {0}")]
    RosterIo(#[from] std::io::Error),
    #[error("failed to scan rosters: {0}")]
    RosterWalk(#[from] walkdir::Error),
    #[error("invalid roster {path}: {message}")]
    RosterParse { path: PathBuf, message: String },
    #[error("roster was not found at {0}")]
    MissingRoster(PathBuf),
}
