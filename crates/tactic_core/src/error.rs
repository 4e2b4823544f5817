use thiserror::Error;

use crate::models::pitch::PitchPoint;

/// Per-event classification failure. The offending event is skipped from its
/// category; classification of everything else continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("event {sequence_index} ({event_type}) is missing required field `{field}`")]
    MissingField {
        sequence_index: u32,
        event_type: &'static str,
        field: &'static str,
    },

    #[error("event {sequence_index} is not present in the full match log")]
    NotInMatchLog { sequence_index: u32 },
}

impl ClassifyError {
    pub fn missing(sequence_index: u32, event_type: &'static str, field: &'static str) -> Self {
        ClassifyError::MissingField { sequence_index, event_type, field }
    }

    pub fn sequence_index(&self) -> u32 {
        match self {
            ClassifyError::MissingField { sequence_index, .. } => *sequence_index,
            ClassifyError::NotInMatchLog { sequence_index } => *sequence_index,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("coordinate ({}, {}) lies outside the 120x80 pitch", .0.x, .0.y)]
    OutOfBounds(PitchPoint),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormationError {
    #[error("no starting lineup event found for {team}")]
    NoMatchingLineup { team: String },

    #[error("lineup event {sequence_index} carries no tactics lineup")]
    MissingLineup { sequence_index: u32 },
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("match {match_id} not found in catalog")]
    MatchNotFound { match_id: u64 },

    #[error("no events for team {team} in match {match_id}")]
    UnknownTeam { match_id: u64, team: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl DataError {
    /// A missing match or team is a selection problem, not a broken data set.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DataError::MatchNotFound { .. } => true,
            DataError::UnknownTeam { .. } => true,
            DataError::Io { .. } => false,
            DataError::Json { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ClassifyError::missing(42, "Shot", "shot.outcome");
        assert_eq!(err.sequence_index(), 42);
        assert_eq!(
            err.to_string(),
            "event 42 (Shot) is missing required field `shot.outcome`"
        );
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = ProjectionError::OutOfBounds(PitchPoint::new(130.0, -2.0));
        assert_eq!(err.to_string(), "coordinate (130, -2) lies outside the 120x80 pitch");
    }

    #[test]
    fn test_data_error_recoverable() {
        assert!(DataError::MatchNotFound { match_id: 1 }.is_recoverable());
        let io = DataError::Io {
            path: "x".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!io.is_recoverable());
    }
}
