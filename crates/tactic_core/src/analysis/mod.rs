//! # Analysis Module
//!
//! Event classification, pitch projection and formation tracking for one
//! match.
//!
//! ## Submodules
//!
//! - `classifier` - Partitions a team's events into tactic-board categories
//! - `projection` - Optional 180° mirror into the shared diagram space
//! - `formation` - Distinct lineups from the starting XI and tactical shifts

pub mod classifier;
pub mod formation;
pub mod projection;

pub use classifier::{classify, BucketCounts, EventBuckets, MatchLog};
pub use formation::{position_point, track, track_team, FormationSnapshot, SnapshotKind};
pub use projection::{project, try_project, Projector};
