//! # tactic_core - Match Tactic Board Engine
//!
//! Turns an open-data soccer event log into tactic-board diagrams: which
//! shots a team took and how they were built up, where it won and lost the
//! ball, the opponent's long passes and carries, and how its formation
//! changed during the match.
//!
//! ## Pipeline
//! 1. [`data`] loads the competition match list and one match's event log
//! 2. [`analysis::classifier`] sorts each team's events into categories
//! 3. [`analysis::projection`] mirrors one team onto the shared board
//! 4. [`analysis::formation`] derives the distinct lineups
//! 5. [`render`] assembles ordered layer lists for a rendering sink
//!
//! [`pipeline::build_dashboard`] runs the whole pass for one match.

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;

pub use analysis::{classify, project, track, EventBuckets, FormationSnapshot, Projector};
pub use config::DashboardConfig;
pub use data::{EventSource, LocalOpenData, MatchCatalog};
pub use error::{ClassifyError, ConfigError, DataError, FormationError, ProjectionError};
pub use models::{Event, EventKind, MatchInfo, MatchOverview, PitchPoint};
pub use pipeline::{build_dashboard, load_dashboard, MatchDashboard, TeamPanel};
pub use render::{Figure, FigureSink, PlotStyle};

/// Crate version, reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
