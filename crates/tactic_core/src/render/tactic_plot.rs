//! # Tactic Plot Assembly
//!
//! Builds one team's tactic diagram: the opponent's sustained carries and
//! long passes as context, then the team's own shots, lead-up trails and
//! defensive actions.
//!
//! ## Layer order
//! 1. opponent carry lines
//! 2. opponent long pass end markers, start markers, connectors
//! 3. non-goal shot markers, goal shot markers
//! 4. non-goal lead-up trails, goal lead-up trails
//! 5. defense-success markers, defense-failure markers
//!
//! The same code draws both the mirrored and unmirrored board: the team's own
//! actions go through `projector`, the opponent's through its opposite.

use std::collections::BTreeMap;

use crate::analysis::classifier::EventBuckets;
use crate::analysis::projection::Projector;
use crate::models::event::Event;
use crate::models::pitch::PitchPoint;

use super::layer::{DiagramKind, Figure, Layer, LineStyle, MarkerStyle};
use super::style::PlotStyle;

pub const CARRY_LAYER: &str = "opponent carry (>3.5s)";
pub const LONG_PASS_LAYER: &str = "opponent long pass (>40 yards)";
pub const LONG_PASS_START_LAYER: &str = "opponent long pass start";
pub const LONG_PASS_PATH_LAYER: &str = "opponent long pass path";
pub const NON_GOAL_LAYER: &str = "shots w/ no goal";
pub const GOAL_LAYER: &str = "shots w/ goal";
pub const NON_GOAL_TRAIL_LAYER: &str = "no goal build-up";
pub const NON_GOAL_TRAIL_PATH_LAYER: &str = "no goal build-up path";
pub const GOAL_TRAIL_LAYER: &str = "goal build-up";
pub const GOAL_TRAIL_PATH_LAYER: &str = "goal build-up path";
pub const DEFENSE_SUCCESS_LAYER: &str = "defense-success";
pub const DEFENSE_FAILURE_LAYER: &str = "defense-no success";

const CARRY_GROUP: &str = "carry";
const PASS_GROUP: &str = "passes";
const NON_GOAL_GROUP: &str = "no goal shots";
const GOAL_GROUP: &str = "goal shots";

pub fn tactic_plot_title(team: &str) -> String {
    format!("{team} Tactic Plot")
}

/// Tactic diagram for `team`, with `opponent` supplying carry/pass context.
pub fn tactic_plot(
    team: &str,
    own: &EventBuckets<'_>,
    opponent: &EventBuckets<'_>,
    projector: Projector,
    style: &PlotStyle,
) -> Figure {
    let mut figure = Figure::new(tactic_plot_title(team), DiagramKind::TacticPlot);
    let theirs = projector.opposite();

    let carries = opponent
        .sustained_carries
        .iter()
        .filter_map(|e| carry_segment(e, theirs))
        .collect();
    figure.push(Layer::lines(CARRY_LAYER, CARRY_GROUP, carries, style.opponent_carry.clone()));

    push_long_passes(&mut figure, &opponent.long_passes, theirs, style);

    figure.push(Layer::markers(
        NON_GOAL_LAYER,
        NON_GOAL_GROUP,
        points(&own.non_goal_shots, projector),
        style.non_goal_shot.clone(),
    ));
    figure.push(Layer::markers(
        GOAL_LAYER,
        GOAL_GROUP,
        points(&own.goals, projector),
        style.goal_shot.clone(),
    ));

    push_trails(
        &mut figure,
        [NON_GOAL_TRAIL_LAYER, NON_GOAL_TRAIL_PATH_LAYER],
        NON_GOAL_GROUP,
        &own.non_goal_lead_ups,
        projector,
        (&style.non_goal_trail_marker, &style.non_goal_trail_line),
    );
    push_trails(
        &mut figure,
        [GOAL_TRAIL_LAYER, GOAL_TRAIL_PATH_LAYER],
        GOAL_GROUP,
        &own.goal_lead_ups,
        projector,
        (&style.goal_trail_marker, &style.goal_trail_line),
    );

    figure.push(Layer::markers(
        DEFENSE_SUCCESS_LAYER,
        DEFENSE_SUCCESS_LAYER,
        points(&own.defense_success, projector),
        style.defense_success.clone(),
    ));
    figure.push(Layer::markers(
        DEFENSE_FAILURE_LAYER,
        DEFENSE_FAILURE_LAYER,
        points(&own.defense_failure, projector),
        style.defense_failure.clone(),
    ));

    figure
}

fn points(events: &[&Event], projector: Projector) -> Vec<PitchPoint> {
    events.iter().filter_map(|e| e.point()).map(|p| projector.point(p)).collect()
}

fn carry_segment(event: &Event, projector: Projector) -> Option<Vec<PitchPoint>> {
    let start = event.point()?;
    let end = event.carry.as_ref()?.end_location?.point();
    Some(projector.segment(start, end).to_vec())
}

fn pass_segment(event: &Event, projector: Projector) -> Option<[PitchPoint; 2]> {
    let start = event.point()?;
    let end = event.pass.as_ref()?.end_location?.point();
    Some(projector.segment(start, end))
}

fn push_long_passes(figure: &mut Figure, passes: &[&Event], projector: Projector, style: &PlotStyle) {
    let segments: Vec<[PitchPoint; 2]> = passes.iter().filter_map(|e| pass_segment(e, projector)).collect();

    let ends = segments.iter().map(|[_, end]| *end).collect();
    let starts = segments.iter().map(|[start, _]| *start).collect();
    let connectors = segments.iter().map(|s| s.to_vec()).collect();

    figure.push(Layer::markers(LONG_PASS_LAYER, PASS_GROUP, ends, style.pass_end.clone()));
    figure.push(
        Layer::markers(LONG_PASS_START_LAYER, PASS_GROUP, starts, style.pass_start.clone()).without_legend(),
    );
    figure.push(
        Layer::lines(LONG_PASS_PATH_LAYER, PASS_GROUP, connectors, style.pass_connector.clone()).without_legend(),
    );
}

/// Trail markers cover every event but the shot itself (drawn by the shot
/// layer); the path runs through the whole trail.
fn push_trails(
    figure: &mut Figure,
    [marker_name, path_name]: [&str; 2],
    group: &str,
    trails: &BTreeMap<u32, Vec<&Event>>,
    projector: Projector,
    (marker, line): (&MarkerStyle, &LineStyle),
) {
    let paths: Vec<Vec<PitchPoint>> = trails.values().map(|trail| points(trail, projector)).collect();
    let build_up = paths
        .iter()
        .flat_map(|path| path.split_last().map_or(&[][..], |(_, rest)| rest))
        .copied()
        .collect();

    figure.push(Layer::markers(marker_name, group, build_up, marker.clone()).without_legend());
    figure.push(Layer::lines(path_name, group, paths, line.clone()).without_legend());
}
