//! Tactic board CLI library
//!
//! Command implementations behind the `tactic` binary. Each command writes
//! to a caller-supplied writer so it can run against a buffer in tests.

use std::io::Write;

use anyhow::{Context, Result};
use tactic_core::data::{EventSource, MatchCatalog};
use tactic_core::render::{figure_schema, JsonLinesSink};
use tactic_core::{load_dashboard, DashboardConfig};

/// Output shape of `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Whole dashboard as one pretty-printed document
    Dashboard,
    /// One figure per line, in display order
    FigureLines,
}

fn catalog<S: EventSource + ?Sized>(source: &S, config: &DashboardConfig) -> Result<MatchCatalog> {
    let matches = source
        .matches(config.competition_id, config.season_id)
        .with_context(|| {
            format!(
                "Failed to load match list for competition {} season {}",
                config.competition_id, config.season_id
            )
        })?;
    Ok(MatchCatalog::new(matches))
}

/// Matches grouped by stage, one `id  label` line per match.
pub fn list_matches<S, W>(source: &S, config: &DashboardConfig, out: &mut W) -> Result<()>
where
    S: EventSource + ?Sized,
    W: Write,
{
    let catalog = catalog(source, config)?;
    if catalog.is_empty() {
        tracing::warn!(
            competition_id = config.competition_id,
            season_id = config.season_id,
            "match list is empty"
        );
    }
    for group in catalog.stages() {
        writeln!(out, "{}", group.stage)?;
        for id in group.match_ids {
            let label = catalog.label(id).unwrap_or_default();
            let marker = if id == config.default_match_id { " (default)" } else { "" };
            writeln!(out, "  {id}  {label}{marker}")?;
        }
    }
    Ok(())
}

pub fn print_overview<S, W>(source: &S, config: &DashboardConfig, match_id: Option<u64>, out: &mut W) -> Result<()>
where
    S: EventSource + ?Sized,
    W: Write,
{
    let catalog = catalog(source, config)?;
    let info = catalog.select(match_id, config.default_match_id)?;
    let overview = info.overview();

    writeln!(out, "{}", info.display_label())?;
    writeln!(out, "{}", overview.match_date)?;
    writeln!(out, "{}", overview.home_score_line)?;
    writeln!(out, "{}", overview.away_score_line)?;
    writeln!(
        out,
        "{} {}",
        overview.home_manager_label,
        overview.home_manager.as_deref().unwrap_or("-")
    )?;
    writeln!(
        out,
        "{} {}",
        overview.away_manager_label,
        overview.away_manager.as_deref().unwrap_or("-")
    )?;
    Ok(())
}

pub fn render<S, W>(
    source: &S,
    config: &DashboardConfig,
    match_id: Option<u64>,
    format: RenderFormat,
    out: &mut W,
) -> Result<()>
where
    S: EventSource + ?Sized,
    W: Write,
{
    let dashboard = load_dashboard(source, config, match_id).context("Failed to build dashboard")?;

    match format {
        RenderFormat::Dashboard => {
            serde_json::to_writer_pretty(&mut *out, &dashboard)?;
            writeln!(out)?;
        }
        RenderFormat::FigureLines => {
            let mut sink = JsonLinesSink::new(&mut *out);
            dashboard.draw(&mut sink)?;
        }
    }
    Ok(())
}

/// JSON Schema of a single figure, or of the whole dashboard document.
pub fn write_schema<W: Write>(dashboard: bool, out: &mut W) -> Result<()> {
    let schema = if dashboard {
        tactic_core::pipeline::dashboard_schema()
    } else {
        figure_schema()
    };
    serde_json::to_writer_pretty(&mut *out, &schema)?;
    writeln!(out)?;
    Ok(())
}
