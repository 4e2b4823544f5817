//! # Event Classifier
//!
//! Partitions one team's events into the tactic-board categories and builds
//! the lead-up trails for shots.
//!
//! ## Algorithm
//! 1. Index the full match log by sequence index (lead-up windows are taken
//!    from the full log, since neighbouring events may belong to either team)
//! 2. Route each team event by its type code into at most one category
//! 3. For shots outside the shootout, take the window ending at the shot:
//!    6 events for goals, 5 for other shots, clamped at the log start, and
//!    keep only events with a location
//! 4. Events missing a field their category needs are reported and skipped
//!
//! The result borrows from the inputs; nothing is copied or mutated.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::error::ClassifyError;
use crate::models::event::{outcome, Event, EventKind, GOAL_OUTCOME};

/// Goal lead-up window: the goal plus its 5 predecessors.
pub const GOAL_LEAD_UP_WINDOW: usize = 6;

/// Non-goal shot lead-up window: the shot plus its 4 predecessors.
pub const SHOT_LEAD_UP_WINDOW: usize = 5;

/// Carries longer than this many seconds are drawn.
pub const SUSTAINED_CARRY_SECS: f64 = 3.5;

/// Completed passes longer than this (grid units) are drawn.
pub const LONG_PASS_LENGTH: f64 = 40.0;

/// Classified events of one team, borrowing from the match log.
#[derive(Debug, Clone, Default)]
pub struct EventBuckets<'a> {
    pub goals: Vec<&'a Event>,
    pub non_goal_shots: Vec<&'a Event>,
    /// Keyed by the goal's sequence index
    pub goal_lead_ups: BTreeMap<u32, Vec<&'a Event>>,
    /// Keyed by the shot's sequence index
    pub non_goal_lead_ups: BTreeMap<u32, Vec<&'a Event>>,
    pub sustained_carries: Vec<&'a Event>,
    pub defense_success: Vec<&'a Event>,
    pub defense_failure: Vec<&'a Event>,
    pub long_passes: Vec<&'a Event>,
    pub starting_lineups: Vec<&'a Event>,
    pub tactical_shifts: Vec<&'a Event>,
    /// Events skipped because of missing data
    pub errors: Vec<ClassifyError>,
}

/// Bucket sizes, for logs and summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub goals: usize,
    pub non_goal_shots: usize,
    pub sustained_carries: usize,
    pub defense_success: usize,
    pub defense_failure: usize,
    pub long_passes: usize,
    pub starting_lineups: usize,
    pub tactical_shifts: usize,
    pub errors: usize,
}

impl EventBuckets<'_> {
    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            goals: self.goals.len(),
            non_goal_shots: self.non_goal_shots.len(),
            sustained_carries: self.sustained_carries.len(),
            defense_success: self.defense_success.len(),
            defense_failure: self.defense_failure.len(),
            long_passes: self.long_passes.len(),
            starting_lineups: self.starting_lineups.len(),
            tactical_shifts: self.tactical_shifts.len(),
            errors: self.errors.len(),
        }
    }

    fn report(&mut self, err: ClassifyError) {
        warn!(sequence_index = err.sequence_index(), "skipping event: {err}");
        self.errors.push(err);
    }
}

/// Full match log indexed for lead-up lookups.
pub struct MatchLog<'a> {
    events: &'a [Event],
    positions: HashMap<u32, usize>,
}

impl<'a> MatchLog<'a> {
    pub fn new(events: &'a [Event]) -> Self {
        let positions = events
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.sequence_index, pos))
            .collect();
        Self { events, positions }
    }

    pub fn position_of(&self, sequence_index: u32) -> Option<usize> {
        self.positions.get(&sequence_index).copied()
    }

    /// Located events among the `window` log entries ending at `event`.
    /// The window start is clamped at the beginning of the log.
    pub fn lead_up(&self, event: &Event, window: usize) -> Result<Vec<&'a Event>, ClassifyError> {
        let pos = self
            .position_of(event.sequence_index)
            .ok_or(ClassifyError::NotInMatchLog { sequence_index: event.sequence_index })?;
        let start = pos.saturating_sub(window.saturating_sub(1));

        Ok(self.events[start..=pos]
            .iter()
            .filter(|e| e.has_location())
            .collect())
    }
}

/// Classify `events` (one team) against the full chronological `full_log`.
pub fn classify<'a, I>(events: I, full_log: &'a [Event]) -> EventBuckets<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let log = MatchLog::new(full_log);
    let mut buckets = EventBuckets::default();

    for event in events {
        if let Err(err) = route(event, &log, &mut buckets) {
            buckets.report(err);
        }
    }

    debug!(counts = ?buckets.counts(), "classified team events");
    buckets
}

fn route<'a>(
    event: &'a Event,
    log: &MatchLog<'a>,
    buckets: &mut EventBuckets<'a>,
) -> Result<(), ClassifyError> {
    match event.kind() {
        EventKind::Shot => classify_shot(event, log, buckets),
        EventKind::Carry => {
            let duration = event.duration.ok_or_else(|| missing(event, "duration"))?;
            if duration > SUSTAINED_CARRY_SECS {
                require_location(event)?;
                event
                    .carry
                    .as_ref()
                    .and_then(|c| c.end_location)
                    .ok_or_else(|| missing(event, "carry.end_location"))?;
                buckets.sustained_carries.push(event);
            }
            Ok(())
        }
        EventKind::Clearance => {
            require_location(event)?;
            buckets.defense_success.push(event);
            Ok(())
        }
        EventKind::Duel => {
            let code = event
                .duel
                .as_ref()
                .and_then(|d| d.sub_outcome())
                .ok_or_else(|| missing(event, "duel.outcome"))?;
            push_defense(event, code, buckets)
        }
        EventKind::Interception => {
            let code = event
                .interception
                .as_ref()
                .and_then(|i| i.outcome.as_ref())
                .map(|o| o.id)
                .ok_or_else(|| missing(event, "interception.outcome"))?;
            push_defense(event, code, buckets)
        }
        EventKind::Pass => {
            let pass = event.pass.as_ref().ok_or_else(|| missing(event, "pass"))?;
            let length = pass.length.ok_or_else(|| missing(event, "pass.length"))?;
            if length > LONG_PASS_LENGTH && pass.outcome.is_none() {
                require_location(event)?;
                pass.end_location.ok_or_else(|| missing(event, "pass.end_location"))?;
                buckets.long_passes.push(event);
            }
            Ok(())
        }
        EventKind::StartingXi => {
            buckets.starting_lineups.push(event);
            Ok(())
        }
        EventKind::TacticalShift => {
            buckets.tactical_shifts.push(event);
            Ok(())
        }
        EventKind::Other(_) => Ok(()),
    }
}

fn classify_shot<'a>(
    event: &'a Event,
    log: &MatchLog<'a>,
    buckets: &mut EventBuckets<'a>,
) -> Result<(), ClassifyError> {
    if event.is_shootout() {
        return Ok(());
    }

    let outcome = event
        .shot
        .as_ref()
        .and_then(|s| s.outcome.as_ref())
        .ok_or_else(|| missing(event, "shot.outcome"))?;
    require_location(event)?;

    let is_goal = outcome.name == GOAL_OUTCOME;
    let window = if is_goal { GOAL_LEAD_UP_WINDOW } else { SHOT_LEAD_UP_WINDOW };

    if is_goal {
        buckets.goals.push(event);
    } else {
        buckets.non_goal_shots.push(event);
    }

    // The shot stays in its bucket even when its trail cannot be built.
    match log.lead_up(event, window) {
        Ok(trail) if is_goal => {
            buckets.goal_lead_ups.insert(event.sequence_index, trail);
        }
        Ok(trail) => {
            buckets.non_goal_lead_ups.insert(event.sequence_index, trail);
        }
        Err(err) => buckets.report(err),
    }
    Ok(())
}

fn push_defense<'a>(
    event: &'a Event,
    code: u32,
    buckets: &mut EventBuckets<'a>,
) -> Result<(), ClassifyError> {
    require_location(event)?;
    if outcome::is_defensive_win(code) {
        buckets.defense_success.push(event);
    } else {
        buckets.defense_failure.push(event);
    }
    Ok(())
}

fn require_location(event: &Event) -> Result<(), ClassifyError> {
    if event.has_location() {
        Ok(())
    } else {
        Err(missing(event, "location"))
    }
}

fn missing(event: &Event, field: &'static str) -> ClassifyError {
    ClassifyError::missing(event.sequence_index, event.kind().label(), field)
}
