//! Event builders shared by unit tests across the crate.

use super::event::*;
use super::pitch::Location;

pub const HOME: &str = "Spain Women's";
pub const AWAY: &str = "England Women's";

pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(sequence_index: u32, kind: EventKind) -> Self {
        Self {
            event: Event {
                id: format!("ev-{sequence_index}"),
                sequence_index,
                period: 1,
                minute: 0,
                second: 0,
                event_type: IdName::new(kind.code(), kind.label()),
                team: Some(IdName::new(1, HOME)),
                player: None,
                location: None,
                duration: None,
                shot: None,
                pass: None,
                carry: None,
                duel: None,
                interception: None,
                tactics: None,
            },
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.event.location = Some(Location::new(x, y));
        self
    }

    pub fn period(mut self, period: u8) -> Self {
        self.event.period = period;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.event.duration = Some(seconds);
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

pub fn located(sequence_index: u32, kind: EventKind) -> Event {
    EventBuilder::new(sequence_index, kind)
        .at(f64::from(sequence_index % 120), 40.0)
        .build()
}

pub fn unlocated(sequence_index: u32, kind: EventKind) -> Event {
    EventBuilder::new(sequence_index, kind).build()
}

pub fn shot(sequence_index: u32, outcome: &str, x: f64, y: f64) -> Event {
    let mut event = EventBuilder::new(sequence_index, EventKind::Shot).at(x, y).build();
    let code = if outcome == GOAL_OUTCOME { 97 } else { 100 };
    event.shot = Some(ShotDetail {
        outcome: Some(IdName::new(code, outcome)),
        end_location: Some(Location::new(120.0, 40.0)),
    });
    event
}

pub fn pass(sequence_index: u32, length: f64, failed: bool) -> Event {
    let mut event = EventBuilder::new(sequence_index, EventKind::Pass).at(30.0, 20.0).build();
    event.pass = Some(PassDetail {
        length: Some(length),
        end_location: Some(Location::new(70.0, 60.0)),
        outcome: failed.then(|| IdName::new(9, "Incomplete")),
    });
    event
}

pub fn carry(sequence_index: u32, duration: f64) -> Event {
    let mut event = EventBuilder::new(sequence_index, EventKind::Carry)
        .at(40.0, 30.0)
        .duration(duration)
        .build();
    event.carry = Some(CarryDetail { end_location: Some(Location::new(55.0, 35.0)) });
    event
}

pub fn duel(sequence_index: u32, outcome_code: u32) -> Event {
    let mut event = EventBuilder::new(sequence_index, EventKind::Duel).at(35.0, 50.0).build();
    event.duel = Some(DuelDetail {
        duel_type: Some(IdName::new(outcome::TACKLE, "Tackle")),
        outcome: Some(IdName::new(outcome_code, "outcome")),
    });
    event
}

pub fn interception(sequence_index: u32, outcome_code: u32) -> Event {
    let mut event = EventBuilder::new(sequence_index, EventKind::Interception)
        .at(45.0, 20.0)
        .build();
    event.interception = Some(InterceptionDetail {
        outcome: Some(IdName::new(outcome_code, "outcome")),
    });
    event
}

pub fn lineup_event(sequence_index: u32, kind: EventKind, codes: &[u32]) -> Event {
    let mut event = EventBuilder::new(sequence_index, kind).build();
    event.tactics = Some(Tactics {
        formation: Some(433),
        lineup: codes
            .iter()
            .enumerate()
            .map(|(i, code)| LineupEntry {
                player: Some(IdName::new(i as u32 + 100, format!("Player {i}"))),
                position: IdName::new(*code, format!("Position {code}")),
                jersey_number: Some(i as u32 + 1),
            })
            .collect(),
    });
    event
}

pub fn starting_xi(sequence_index: u32, codes: &[u32]) -> Event {
    lineup_event(sequence_index, EventKind::StartingXi, codes)
}

pub fn tactical_shift(sequence_index: u32, minute: u32, second: u32, codes: &[u32]) -> Event {
    let mut event = lineup_event(sequence_index, EventKind::TacticalShift, codes);
    event.minute = minute;
    event.second = second;
    event
}

pub const BASE_XI: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

pub fn away(mut event: Event) -> Event {
    event.team = Some(IdName::new(2, AWAY));
    event
}

/// Minimal but complete two-team log: lineups, a goal with build-up, a saved
/// shot, defensive actions, a carry and a long pass for each side.
pub fn sample_match_log() -> Vec<Event> {
    vec![
        starting_xi(1, &BASE_XI),
        away(starting_xi(2, &[1, 2, 3, 4, 5, 9, 10, 11, 22, 23, 24])),
        located(3, EventKind::Other(42)),
        pass(4, 45.0, false),
        carry(5, 4.2),
        unlocated(6, EventKind::Other(18)),
        located(7, EventKind::Other(42)),
        shot(8, GOAL_OUTCOME, 108.0, 38.0),
        away(pass(9, 52.0, false)),
        away(carry(10, 5.0)),
        away(shot(11, "Saved", 100.0, 45.0)),
        duel(12, outcome::WON),
        interception(13, 13),
        EventBuilder::new(14, EventKind::Clearance).at(10.0, 40.0).build(),
        tactical_shift(15, 46, 0, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12]),
    ]
}

pub const MATCH_JSON: &str = r#"{
    "match_id": 3906390,
    "match_date": "2023-08-20",
    "kick_off": "12:00:00.000",
    "home_team": {
        "home_team_id": 1,
        "home_team_name": "Spain Women's",
        "country": {"id": 214, "name": "Spain"},
        "managers": [{"id": 1, "name": "Jorge Vilda Rodríguez"}]
    },
    "away_team": {
        "away_team_id": 2,
        "away_team_name": "England Women's",
        "country": {"id": 68, "name": "England"},
        "managers": [{"id": 2, "name": "Sarina Wiegman"}]
    },
    "home_score": 1,
    "away_score": 0,
    "competition_stage": {"id": 26, "name": "Final"}
}"#;
