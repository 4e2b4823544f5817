//! # Event Source
//!
//! Upstream seam for match lists and event logs. [`LocalOpenData`] reads a
//! checkout of the open-data repository:
//!
//! ```text
//! {root}/matches/{competition_id}/{season_id}.json
//! {root}/events/{match_id}.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::DataError;
use crate::models::event::Event;
use crate::models::match_info::MatchInfo;

pub trait EventSource {
    fn matches(&self, competition_id: u32, season_id: u32) -> Result<Vec<MatchInfo>, DataError>;

    /// Full match log in chronological (`sequence_index`) order.
    fn events(&self, match_id: u64) -> Result<Vec<Event>, DataError>;
}

#[derive(Debug, Clone)]
pub struct LocalOpenData {
    root: PathBuf,
}

impl LocalOpenData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn matches_path(&self, competition_id: u32, season_id: u32) -> PathBuf {
        self.root
            .join("matches")
            .join(competition_id.to_string())
            .join(format!("{season_id}.json"))
    }

    pub fn events_path(&self, match_id: u64) -> PathBuf {
        self.root.join("events").join(format!("{match_id}.json"))
    }
}

impl EventSource for LocalOpenData {
    fn matches(&self, competition_id: u32, season_id: u32) -> Result<Vec<MatchInfo>, DataError> {
        let path = self.matches_path(competition_id, season_id);
        let matches: Vec<MatchInfo> = read_json(&path)?;
        info!(competition_id, season_id, count = matches.len(), "loaded match list");
        Ok(matches)
    }

    fn events(&self, match_id: u64) -> Result<Vec<Event>, DataError> {
        let path = self.events_path(match_id);
        let mut events: Vec<Event> = read_json(&path)?;
        events.sort_by_key(|e| e.sequence_index);
        info!(match_id, count = events.len(), "loaded match events");
        Ok(events)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    debug!(path = %path.display(), "reading json");
    let data = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| DataError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// One match log split by team, both sides borrowing from the full log.
#[derive(Debug, Clone)]
pub struct TeamSplit<'a> {
    pub home: Vec<&'a Event>,
    pub away: Vec<&'a Event>,
}

/// Partition `events` by team name. Events of other teams (or none) are
/// ignored; a team with no events at all is an error.
pub fn split_teams<'a>(
    match_id: u64,
    events: &'a [Event],
    home: &str,
    away: &str,
) -> Result<TeamSplit<'a>, DataError> {
    let side = |team: &str| -> Result<Vec<&'a Event>, DataError> {
        let picked: Vec<&'a Event> = events.iter().filter(|e| e.team_name() == Some(team)).collect();
        if picked.is_empty() {
            return Err(DataError::UnknownTeam { match_id, team: team.to_string() });
        }
        Ok(picked)
    };

    Ok(TeamSplit { home: side(home)?, away: side(away)? })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_local_layout_paths() {
        let source = LocalOpenData::new("/data/open-data/data");
        assert_eq!(
            source.matches_path(72, 107),
            PathBuf::from("/data/open-data/data/matches/72/107.json")
        );
        assert_eq!(
            source.events_path(3906390),
            PathBuf::from("/data/open-data/data/events/3906390.json")
        );
    }

    #[test]
    fn test_load_matches_and_events() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "matches/72/107.json", &format!("[{MATCH_JSON}]"));

        let mut log = sample_match_log();
        log.reverse();
        write(dir.path(), "events/3906390.json", &serde_json::to_string(&log).unwrap());

        let source = LocalOpenData::new(dir.path());
        let matches = source.matches(72, 107).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_id, 3906390);

        let events = source.events(3906390).unwrap();
        assert_eq!(events.len(), 15);
        assert!(events.windows(2).all(|w| w[0].sequence_index < w[1].sequence_index));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalOpenData::new(dir.path()).events(1).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "events/1.json", "[{\"index\": 1}");
        let err = LocalOpenData::new(dir.path()).events(1).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
        assert!(err.to_string().contains("1.json"));
    }

    #[test]
    fn test_split_teams() {
        let log = sample_match_log();
        let split = split_teams(1, &log, HOME, AWAY).unwrap();
        assert_eq!(split.home.len(), 11);
        assert_eq!(split.away.len(), 4);
        assert!(split.away.iter().all(|e| e.team_name() == Some(AWAY)));
    }

    #[test]
    fn test_split_unknown_team() {
        let log = sample_match_log();
        let err = split_teams(1, &log, HOME, "Brazil Women's").unwrap_err();
        match err {
            DataError::UnknownTeam { match_id, team } => {
                assert_eq!(match_id, 1);
                assert_eq!(team, "Brazil Women's");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
