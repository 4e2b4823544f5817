//! # Models
//!
//! Input records of the open-data feed (events, match list) and the pitch
//! coordinate types shared by analysis and rendering.

pub mod event;
pub mod match_info;
pub mod pitch;

#[cfg(test)]
pub(crate) mod fixtures;

pub use event::{
    outcome, CarryDetail, DuelDetail, Event, EventKind, IdName, InterceptionDetail, LineupEntry,
    PassDetail, ShotDetail, Tactics, GOAL_OUTCOME, SHOOTOUT_PERIOD,
};
pub use match_info::{short_team_name, CompetitionStage, Manager, MatchInfo, MatchOverview, MatchTeam};
pub use pitch::{Location, PitchPoint, PITCH_LENGTH, PITCH_WIDTH};
