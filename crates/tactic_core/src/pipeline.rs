//! # Dashboard Pipeline
//!
//! One pass per match selection: split the log by team, classify both teams,
//! then assemble each team's tactic and formation diagrams.
//!
//! The home team is drawn as recorded and the away team mirrored. On each
//! tactic plot the opponent's context uses the opposite flag, so both teams
//! attack in the same direction on a shared board.
//!
//! Both stages run the two teams through `rayon::join`; the full log is only
//! ever borrowed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::classifier::{classify, EventBuckets};
use crate::analysis::formation::track_team;
use crate::analysis::projection::Projector;
use crate::config::DashboardConfig;
use crate::data::catalog::MatchCatalog;
use crate::data::source::{split_teams, EventSource};
use crate::error::DataError;
use crate::models::event::Event;
use crate::models::match_info::{MatchInfo, MatchOverview, MatchTeam};
use crate::render::formation_plot::formation_plot;
use crate::render::layer::Figure;
use crate::render::sink::FigureSink;
use crate::render::style::PlotStyle;
use crate::render::tactic_plot::tactic_plot;

/// Diagrams for one team.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TeamPanel {
    pub team: String,
    pub display_name: String,
    pub mirrored: bool,
    pub tactic_plot: Figure,
    /// Absent when the team has no usable starting lineup
    pub formation: Option<Figure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_error: Option<String>,
    /// Events left out of the diagrams because of missing data
    pub skipped_events: usize,
}

/// Everything shown for one selected match.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MatchDashboard {
    pub overview: MatchOverview,
    pub home: TeamPanel,
    pub away: TeamPanel,
}

impl MatchDashboard {
    /// Figures in display order: home tactic, home formation, away tactic,
    /// away formation.
    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        [&self.home, &self.away]
            .into_iter()
            .flat_map(|panel| std::iter::once(&panel.tactic_plot).chain(panel.formation.as_ref()))
    }

    pub fn draw<S: FigureSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        for figure in self.figures() {
            sink.draw(figure)?;
        }
        Ok(())
    }
}

/// Build the dashboard for `info` from its full chronological event log.
pub fn build_dashboard(info: &MatchInfo, events: &[Event], style: &PlotStyle) -> Result<MatchDashboard, DataError> {
    let split = split_teams(info.match_id, events, &info.home_team.name, &info.away_team.name)?;

    let (home_buckets, away_buckets) = rayon::join(
        || classify(split.home.iter().copied(), events),
        || classify(split.away.iter().copied(), events),
    );

    let (home, away) = rayon::join(
        || team_panel(&info.home_team, &home_buckets, &away_buckets, Projector::identity(), style),
        || team_panel(&info.away_team, &away_buckets, &home_buckets, Projector::mirrored(), style),
    );

    info!(match_id = info.match_id, "built dashboard");
    Ok(MatchDashboard { overview: info.overview(), home, away })
}

fn team_panel(
    team: &MatchTeam,
    own: &EventBuckets<'_>,
    opponent: &EventBuckets<'_>,
    projector: Projector,
    style: &PlotStyle,
) -> TeamPanel {
    let display_name = team.short_name();
    let counts = own.counts();
    info!(team = %team.name, ?counts, "classified team events");

    let (formation, formation_error) = match track_team(own, &team.name) {
        Ok(timeline) => (Some(formation_plot(&display_name, &timeline, projector, style)), None),
        Err(err) => {
            warn!(team = %team.name, "formation diagram unavailable: {err}");
            (None, Some(err.to_string()))
        }
    };

    TeamPanel {
        team: team.name.clone(),
        tactic_plot: tactic_plot(&display_name, own, opponent, projector, style),
        display_name,
        mirrored: projector.is_mirrored(),
        formation,
        formation_error,
        skipped_events: counts.errors,
    }
}

/// Load the match list and event log through `source`, then build the
/// dashboard for `selected` (or the configured default match).
pub fn load_dashboard<S: EventSource + ?Sized>(
    source: &S,
    config: &DashboardConfig,
    selected: Option<u64>,
) -> Result<MatchDashboard, DataError> {
    let catalog = MatchCatalog::new(source.matches(config.competition_id, config.season_id)?);
    let info = catalog.select(selected, config.default_match_id)?;
    let events = source.events(info.match_id)?;
    build_dashboard(info, &events, &config.style)
}

pub fn dashboard_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(MatchDashboard)
}
