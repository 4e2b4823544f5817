//! Formation diagram: one marker group per distinct lineup, with only the
//! starting XI visible initially.

use tracing::warn;

use crate::analysis::formation::{position_point, FormationSnapshot};
use crate::analysis::projection::Projector;
use crate::models::pitch::PitchPoint;

use super::layer::{DiagramKind, Figure, Layer};
use super::style::PlotStyle;

const FORMATION_GROUP: &str = "formation";

pub fn formation_title(team: &str) -> String {
    format!("{team} Formation")
}

pub fn formation_plot(team: &str, timeline: &[FormationSnapshot], projector: Projector, style: &PlotStyle) -> Figure {
    let mut figure = Figure::new(formation_title(team), DiagramKind::Formation);

    for snapshot in timeline {
        let points = snapshot_points(snapshot, projector);
        let label = snapshot.label();
        let layer = if snapshot.is_starting() {
            Layer::markers(label, FORMATION_GROUP, points, style.formation_starting.clone())
        } else {
            Layer::markers(label, FORMATION_GROUP, points, style.formation_shift.clone()).legend_only()
        };
        figure.push(layer);
    }

    figure
}

fn snapshot_points(snapshot: &FormationSnapshot, projector: Projector) -> Vec<PitchPoint> {
    snapshot
        .positions
        .iter()
        .filter_map(|&code| {
            let point = position_point(code);
            if point.is_none() {
                warn!(code, label = %snapshot.label(), "unknown position code; skipping marker");
            }
            point
        })
        .map(|p| projector.point(p))
        .collect()
}
