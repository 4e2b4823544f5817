use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::IdName;

/// Country names shortened for match labels.
const COUNTRY_REPLACEMENTS: [(&str, &str); 2] = [
    ("Korea\u{a0}(South)", "South Korea"),
    ("United States of America", "USA"),
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Manager {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Home or away side of a match record. The feed prefixes every key with
/// `home_team_` / `away_team_`, hence the aliases.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchTeam {
    #[serde(alias = "home_team_id", alias = "away_team_id")]
    pub id: u32,
    #[serde(alias = "home_team_name", alias = "away_team_name")]
    pub name: String,
    #[serde(default)]
    pub country: Option<IdName>,
    #[serde(default)]
    pub managers: Vec<Manager>,
}

impl MatchTeam {
    /// Team name without its trailing qualifier, e.g. `Spain Women's` -> `Spain`.
    pub fn short_name(&self) -> String {
        short_team_name(&self.name)
    }

    /// Country name for match labels, with the long official names shortened.
    pub fn country_label(&self) -> String {
        let raw = self
            .country
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(self.name.as_str());
        COUNTRY_REPLACEMENTS
            .iter()
            .fold(raw.to_string(), |acc, (from, to)| acc.replace(from, to))
    }

    pub fn first_manager(&self) -> Option<&str> {
        self.managers.first().map(|m| m.name.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CompetitionStage {
    pub id: u32,
    pub name: String,
}

/// One entry of the competition/season match list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatchInfo {
    pub match_id: u64,
    pub match_date: NaiveDate,
    #[serde(default)]
    pub kick_off: Option<NaiveTime>,
    pub home_team: MatchTeam,
    pub away_team: MatchTeam,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    pub competition_stage: CompetitionStage,
}

impl MatchInfo {
    /// Menu label, e.g. `Spain vs. England`.
    pub fn display_label(&self) -> String {
        format!(
            "{} vs. {}",
            self.home_team.country_label(),
            self.away_team.country_label()
        )
    }

    pub fn overview(&self) -> MatchOverview {
        let home = self.home_team.short_name();
        let away = self.away_team.short_name();
        MatchOverview {
            match_id: self.match_id,
            match_date: self.match_date,
            home_score_line: format!("{} score: {}", home, score_text(self.home_score)),
            away_score_line: format!("{} score: {}", away, score_text(self.away_score)),
            home_manager_label: format!("{home} manager:"),
            away_manager_label: format!("{away} manager:"),
            home_manager: self.home_team.first_manager().map(str::to_string),
            away_manager: self.away_team.first_manager().map(str::to_string),
        }
    }
}

/// Text block shown next to the diagrams for the selected match.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct MatchOverview {
    pub match_id: u64,
    pub match_date: NaiveDate,
    pub home_score_line: String,
    pub away_score_line: String,
    pub home_manager_label: String,
    pub away_manager_label: String,
    pub home_manager: Option<String>,
    pub away_manager: Option<String>,
}

/// Drops the last word of a team name; single-word names are kept whole.
pub fn short_team_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.len() {
        0 => String::new(),
        1 => words[0].to_string(),
        n => words[..n - 1].join(" "),
    }
}

fn score_text(score: Option<u32>) -> String {
    score.map_or("-".to_string(), |s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINAL_JSON: &str = r#"{
        "match_id": 3906390,
        "match_date": "2023-08-20",
        "kick_off": "12:00:00.000",
        "competition": {"competition_id": 72, "competition_name": "Women's World Cup"},
        "home_team": {
            "home_team_id": 863,
            "home_team_name": "Spain Women's",
            "home_team_gender": "female",
            "country": {"id": 214, "name": "Spain"},
            "managers": [{"id": 1, "name": "Jorge Vilda Rodríguez", "nickname": "Jorge Vilda"}]
        },
        "away_team": {
            "away_team_id": 865,
            "away_team_name": "England Women's",
            "country": {"id": 68, "name": "England"},
            "managers": [{"id": 2, "name": "Sarina Wiegman"}]
        },
        "home_score": 1,
        "away_score": 0,
        "competition_stage": {"id": 26, "name": "Final"}
    }"#;

    #[test]
    fn test_match_info_deserialization() {
        let info: MatchInfo = serde_json::from_str(FINAL_JSON).unwrap();
        assert_eq!(info.match_id, 3906390);
        assert_eq!(info.home_team.name, "Spain Women's");
        assert_eq!(info.away_team.id, 865);
        assert_eq!(info.competition_stage.name, "Final");
        assert_eq!(info.match_date, NaiveDate::from_ymd_opt(2023, 8, 20).unwrap());
        assert!(info.kick_off.is_some());
    }

    #[test]
    fn test_display_label_shortens_countries() {
        let mut info: MatchInfo = serde_json::from_str(FINAL_JSON).unwrap();
        assert_eq!(info.display_label(), "Spain vs. England");

        info.home_team.country = Some(IdName::new(1, "Korea\u{a0}(South)"));
        info.away_team.country = Some(IdName::new(2, "United States of America"));
        assert_eq!(info.display_label(), "South Korea vs. USA");
    }

    #[test]
    fn test_short_team_name() {
        assert_eq!(short_team_name("Spain Women's"), "Spain");
        assert_eq!(short_team_name("New Zealand Women's"), "New Zealand");
        assert_eq!(short_team_name("Brazil"), "Brazil");
        assert_eq!(short_team_name(""), "");
    }

    #[test]
    fn test_overview_lines() {
        let info: MatchInfo = serde_json::from_str(FINAL_JSON).unwrap();
        let overview = info.overview();
        assert_eq!(overview.home_score_line, "Spain score: 1");
        assert_eq!(overview.away_score_line, "England score: 0");
        assert_eq!(overview.home_manager_label, "Spain manager:");
        assert_eq!(overview.home_manager.as_deref(), Some("Jorge Vilda Rodríguez"));
        assert_eq!(overview.away_manager.as_deref(), Some("Sarina Wiegman"));
    }

    #[test]
    fn test_overview_without_managers() {
        let mut info: MatchInfo = serde_json::from_str(FINAL_JSON).unwrap();
        info.away_team.managers.clear();
        info.away_score = None;
        let overview = info.overview();
        assert_eq!(overview.away_manager, None);
        assert_eq!(overview.away_score_line, "England score: -");
    }
}
