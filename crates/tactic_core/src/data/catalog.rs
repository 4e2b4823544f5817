//! Match list for one competition season: stage grouping, menu labels and
//! selection with a default fallback.

use crate::error::DataError;
use crate::models::match_info::MatchInfo;

/// Stage whose matches are listed in id order rather than feed order.
pub const GROUP_STAGE: &str = "Group Stage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageGroup {
    pub stage: String,
    pub match_ids: Vec<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchCatalog {
    matches: Vec<MatchInfo>,
}

impl MatchCatalog {
    pub fn new(matches: Vec<MatchInfo>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Match ids grouped by competition stage, stages in first-seen order.
    /// Group-stage ids are ordered by their decimal text, so `10` sorts
    /// before `9`.
    pub fn stages(&self) -> Vec<StageGroup> {
        let mut groups: Vec<StageGroup> = Vec::new();
        for info in &self.matches {
            let stage = &info.competition_stage.name;
            match groups.iter_mut().find(|g| &g.stage == stage) {
                Some(group) => group.match_ids.push(info.match_id),
                None => groups.push(StageGroup {
                    stage: stage.clone(),
                    match_ids: vec![info.match_id],
                }),
            }
        }

        if let Some(group) = groups.iter_mut().find(|g| g.stage == GROUP_STAGE) {
            group.match_ids.sort_by_key(|id| id.to_string());
        }
        groups
    }

    pub fn get(&self, match_id: u64) -> Result<&MatchInfo, DataError> {
        self.matches
            .iter()
            .find(|m| m.match_id == match_id)
            .ok_or(DataError::MatchNotFound { match_id })
    }

    /// The selected match, or `default_id` when nothing is selected.
    pub fn select(&self, selected: Option<u64>, default_id: u64) -> Result<&MatchInfo, DataError> {
        self.get(selected.unwrap_or(default_id))
    }

    pub fn label(&self, match_id: u64) -> Option<String> {
        self.get(match_id).ok().map(MatchInfo::display_label)
    }

    /// Full `(home, away)` team names, as used to split the event log.
    pub fn teams(&self, match_id: u64) -> Option<(&str, &str)> {
        self.get(match_id)
            .ok()
            .map(|m| (m.home_team.name.as_str(), m.away_team.name.as_str()))
    }
}
