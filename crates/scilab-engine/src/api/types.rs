use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for one placement of an atom in the sandbox.
/// Two hydrogen atoms placed separately get two different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomId(pub u32);

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atom-{}", self.0)
    }
}

/// Severity attached to every feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A human-readable status message plus its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

impl Feedback {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Game mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    FreePlay,
    Quiz,
}

impl GameMode {
    /// Parse the mode names used by the UI ("free-play", "quiz").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free-play" => Some(Self::FreePlay),
            "quiz" => Some(Self::Quiz),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn atom_id_is_transparent() {
        assert_eq!(serde_json::to_string(&AtomId(7)).unwrap(), "7");
        assert_eq!(AtomId(7).to_string(), "atom-7");
    }

    #[test]
    fn mode_names() {
        assert_eq!(GameMode::parse("quiz"), Some(GameMode::Quiz));
        assert_eq!(GameMode::parse("free-play"), Some(GameMode::FreePlay));
        assert_eq!(GameMode::parse("sandbox"), None);
        assert_eq!(serde_json::to_string(&GameMode::FreePlay).unwrap(), "\"free-play\"");
    }
}
