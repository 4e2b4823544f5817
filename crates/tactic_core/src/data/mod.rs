//! Match data access: the competition match list and per-match event logs.

pub mod catalog;
pub mod source;

pub use catalog::{MatchCatalog, StageGroup, GROUP_STAGE};
pub use source::{split_teams, EventSource, LocalOpenData, TeamSplit};
