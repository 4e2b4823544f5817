//! # Match Event Model
//!
//! Typed view of one record from the open-data event feed. Only the fields the
//! tactic board reads are modelled; everything else in the record is ignored
//! on deserialization.

use serde::{Deserialize, Serialize};

use super::pitch::{Location, PitchPoint};

/// Period code of the penalty shootout.
pub const SHOOTOUT_PERIOD: u8 = 5;

/// Shot outcome name that marks a goal.
pub const GOAL_OUTCOME: &str = "Goal";

/// Duel / interception sub-outcome codes counted as a won defensive action.
pub mod outcome {
    /// Duel type "Tackle" (duels with no explicit outcome fall back to their type).
    pub const TACKLE: u32 = 11;
    pub const WON: u32 = 4;
    pub const SUCCESS: u32 = 15;
    pub const SUCCESS_IN_PLAY: u32 = 16;
    pub const SUCCESS_OUT: u32 = 17;

    pub const DEFENSIVE_WIN: [u32; 5] = [TACKLE, WON, SUCCESS, SUCCESS_IN_PLAY, SUCCESS_OUT];

    pub fn is_defensive_win(code: u32) -> bool {
        DEFENSIVE_WIN.contains(&code)
    }
}

/// `{ "id": .., "name": .. }` pair used throughout the feed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct IdName {
    pub id: u32,
    pub name: String,
}

impl IdName {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// Event kinds the board distinguishes, keyed by the feed's stable type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Duel,
    Clearance,
    Interception,
    Shot,
    Pass,
    StartingXi,
    TacticalShift,
    Carry,
    Other(u32),
}

impl EventKind {
    pub fn from_code(code: u32) -> Self {
        match code {
            4 => Self::Duel,
            9 => Self::Clearance,
            10 => Self::Interception,
            16 => Self::Shot,
            30 => Self::Pass,
            35 => Self::StartingXi,
            36 => Self::TacticalShift,
            43 => Self::Carry,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Duel => 4,
            Self::Clearance => 9,
            Self::Interception => 10,
            Self::Shot => 16,
            Self::Pass => 30,
            Self::StartingXi => 35,
            Self::TacticalShift => 36,
            Self::Carry => 43,
            Self::Other(code) => *code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Duel => "Duel",
            Self::Clearance => "Clearance",
            Self::Interception => "Interception",
            Self::Shot => "Shot",
            Self::Pass => "Pass",
            Self::StartingXi => "Starting XI",
            Self::TacticalShift => "Tactical Shift",
            Self::Carry => "Carry",
            Self::Other(_) => "Other",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ShotDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Location>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PassDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Location>,
    /// Present only for passes that failed (incomplete, out, offside, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<IdName>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CarryDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Location>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DuelDetail {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub duel_type: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<IdName>,
}

impl DuelDetail {
    /// Outcome code, or the duel type code when the feed records no outcome.
    pub fn sub_outcome(&self) -> Option<u32> {
        self.outcome
            .as_ref()
            .or(self.duel_type.as_ref())
            .map(|v| v.id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct InterceptionDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<IdName>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineupEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<IdName>,
    pub position: IdName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Tactics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<u32>,
    #[serde(default)]
    pub lineup: Vec<LineupEntry>,
}

impl Tactics {
    /// Position codes in lineup order.
    pub fn position_codes(&self) -> Vec<u32> {
        self.lineup.iter().map(|entry| entry.position.id).collect()
    }
}

/// One record of the match event log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    #[serde(default)]
    pub id: String,
    /// Position in the full chronological match log (1-based in the feed)
    #[serde(rename = "index")]
    pub sequence_index: u32,
    pub period: u8,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(rename = "type")]
    pub event_type: IdName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<IdName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot: Option<ShotDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<PassDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carry: Option<CarryDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duel: Option<DuelDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interception: Option<InterceptionDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tactics: Option<Tactics>,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        EventKind::from_code(self.event_type.id)
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|t| t.name.as_str())
    }

    pub fn point(&self) -> Option<PitchPoint> {
        self.location.map(PitchPoint::from)
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    pub fn is_shootout(&self) -> bool {
        self.period == SHOOTOUT_PERIOD
    }
}
