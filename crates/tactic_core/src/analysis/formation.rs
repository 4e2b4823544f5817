//! # Formation Tracker
//!
//! Derives the sequence of distinct lineups a team fielded: the starting XI,
//! then every tactical shift whose set of occupied position codes differs
//! from the previous emitted one.
//!
//! Formation identity is the *set* of position codes. Player identity and
//! lineup order are ignored, so a shift that only swaps players is dropped.

use std::collections::BTreeSet;

use tracing::warn;

use crate::analysis::classifier::EventBuckets;
use crate::error::FormationError;
use crate::models::event::Event;
use crate::models::pitch::PitchPoint;

pub const STARTING_LABEL: &str = "starting XI";

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Starting,
    Shift { minute: u32, second: u32 },
}

/// One distinct lineup in the formation timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationSnapshot {
    pub kind: SnapshotKind,
    pub positions: BTreeSet<u32>,
}

impl FormationSnapshot {
    pub fn label(&self) -> String {
        match self.kind {
            SnapshotKind::Starting => STARTING_LABEL.to_string(),
            SnapshotKind::Shift { minute, second } => format!("tactical shift {minute}:{second}"),
        }
    }

    pub fn is_starting(&self) -> bool {
        self.kind == SnapshotKind::Starting
    }
}

fn position_set(event: &Event) -> Result<BTreeSet<u32>, FormationError> {
    event
        .tactics
        .as_ref()
        .filter(|t| !t.lineup.is_empty())
        .map(|t| t.position_codes().into_iter().collect())
        .ok_or(FormationError::MissingLineup { sequence_index: event.sequence_index })
}

/// Formation timeline from a starting lineup and the team's shift events in
/// match order. A shift without a lineup is logged and skipped.
pub fn track(starting: &Event, shifts: &[&Event]) -> Result<Vec<FormationSnapshot>, FormationError> {
    let mut timeline = vec![FormationSnapshot {
        kind: SnapshotKind::Starting,
        positions: position_set(starting)?,
    }];

    for shift in shifts {
        let positions = match position_set(shift) {
            Ok(positions) => positions,
            Err(err) => {
                warn!(sequence_index = shift.sequence_index, "skipping tactical shift: {err}");
                continue;
            }
        };

        let changed = timeline
            .last()
            .map_or(true, |last| last.positions != positions);
        if changed {
            timeline.push(FormationSnapshot {
                kind: SnapshotKind::Shift { minute: shift.minute, second: shift.second },
                positions,
            });
        }
    }

    Ok(timeline)
}

/// Formation timeline for one team's classified events.
pub fn track_team(buckets: &EventBuckets<'_>, team: &str) -> Result<Vec<FormationSnapshot>, FormationError> {
    let starting = match buckets.starting_lineups.as_slice() {
        [] => {
            let err = FormationError::NoMatchingLineup { team: team.to_string() };
            warn!(team, "{err}");
            return Err(err);
        }
        [first] => *first,
        [first, ..] => {
            warn!(team, count = buckets.starting_lineups.len(), "multiple starting lineups; using the first");
            *first
        }
    };

    track(starting, &buckets.tactical_shifts)
}

/// Pitch coordinate of a StatsBomb position code on the formation diagram.
///
/// Codes run from the goalkeeper (1) through the back line (2-6), defensive
/// midfield (7-11), midfield (12-16), attacking midfield (17-21) to the
/// forwards (22-24, with 25 the secondary striker).
pub fn position_point(code: u32) -> Option<PitchPoint> {
    let (x, y) = match code {
        1 => (10.0, 40.0),
        2 => (25.0, 72.0),
        3 => (25.0, 56.0),
        4 => (25.0, 40.0),
        5 => (25.0, 24.0),
        6 => (25.0, 8.0),
        7 => (42.5, 72.0),
        9 => (42.5, 56.0),
        10 => (42.5, 40.0),
        11 => (42.5, 24.0),
        8 => (42.5, 8.0),
        12 => (60.0, 72.0),
        13 => (60.0, 56.0),
        14 => (60.0, 40.0),
        15 => (60.0, 24.0),
        16 => (60.0, 8.0),
        17 => (77.5, 72.0),
        18 => (77.5, 56.0),
        19 => (77.5, 40.0),
        20 => (77.5, 24.0),
        21 => (77.5, 8.0),
        22 => (100.0, 56.0),
        23 => (100.0, 40.0),
        24 => (100.0, 24.0),
        25 => (88.75, 40.0),
        _ => return None,
    };
    Some(PitchPoint::new(x, y))
}
