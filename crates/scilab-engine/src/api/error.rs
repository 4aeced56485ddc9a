//! Errors returned by session operations.
//!
//! Catalog lookups return `Option` and validation/feedback are plain data,
//! so this only covers requests the session cannot carry out.

use thiserror::Error;

use crate::api::types::AtomId;

#[derive(Debug, Error)]
pub enum LabError {
    /// The symbol is not in the periodic table.
    #[error("unknown element symbol: {0:?}")]
    UnknownElement(String),

    /// No placed atom has this id.
    #[error("no placed atom with id {0}")]
    UnknownAtom(AtomId),

    /// Mode names are "free-play" and "quiz".
    #[error("unknown game mode: {0:?}")]
    UnknownMode(String),

    /// No challenge has this level number.
    #[error("no quiz challenge at level {0}")]
    UnknownLevel(u32),

    /// A quiz operation was requested outside quiz mode or after the last level.
    #[error("no active quiz challenge")]
    NoActiveChallenge,

    /// Caller-supplied configuration did not parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            LabError::UnknownElement("Xx".into()).to_string(),
            "unknown element symbol: \"Xx\""
        );
        assert_eq!(LabError::UnknownAtom(AtomId(4)).to_string(), "no placed atom with id atom-4");
        assert_eq!(LabError::UnknownLevel(99).to_string(), "no quiz challenge at level 99");
        assert_eq!(LabError::UnknownMode("zen".into()).to_string(), "unknown game mode: \"zen\"");
    }

    #[test]
    fn config_error_converts() {
        let err: LabError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, LabError::Config(_)));
    }
}
