//! # Coordinate Projector
//!
//! Maps event-grid coordinates into the diagram space. One of the two teams
//! is rendered through a 180° mirror so both sides attack the same way on
//! the shared board.
//!
//! ## Contract
//! - `project(p, false) == p`
//! - `project(p, true) == (120 - x, 80 - y)`
//! - `project(project(p, true), true) == p`
//!
//! Out-of-pitch coordinates are rejected by [`try_project`] and clamped (with
//! a warning) by [`Projector`], which is what the plot assembly uses.

use tracing::warn;

use crate::error::ProjectionError;
use crate::models::pitch::{PitchPoint, PITCH_LENGTH, PITCH_WIDTH};

/// Pure mirror transform. No bounds handling.
pub fn project(point: PitchPoint, mirror: bool) -> PitchPoint {
    if mirror {
        PitchPoint::new(PITCH_LENGTH - point.x, PITCH_WIDTH - point.y)
    } else {
        point
    }
}

/// Bounds-checked projection.
pub fn try_project(point: PitchPoint, mirror: bool) -> Result<PitchPoint, ProjectionError> {
    if !point.is_valid() {
        return Err(ProjectionError::OutOfBounds(point));
    }
    Ok(project(point, mirror))
}

/// Projection with a fixed mirror flag, applied uniformly to every
/// location-bearing field of one team's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projector {
    mirror: bool,
}

impl Projector {
    pub fn new(mirror: bool) -> Self {
        Self { mirror }
    }

    pub fn identity() -> Self {
        Self::new(false)
    }

    pub fn mirrored() -> Self {
        Self::new(true)
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirror
    }

    /// Projector for the other side of the same diagram.
    pub fn opposite(&self) -> Self {
        Self::new(!self.mirror)
    }

    /// Clamps out-of-bounds input to the nearest in-pitch point, then projects.
    pub fn point(&self, point: PitchPoint) -> PitchPoint {
        match try_project(point, self.mirror) {
            Ok(projected) => projected,
            Err(err) => {
                let clamped = point.clamped();
                warn!(x = point.x, y = point.y, clamped_x = clamped.x, clamped_y = clamped.y, "{err}; clamping");
                project(clamped, self.mirror)
            }
        }
    }

    /// Start/end pair, both through the same flag.
    pub fn segment(&self, start: PitchPoint, end: PitchPoint) -> [PitchPoint; 2] {
        [self.point(start), self.point(end)]
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity_projection() {
        let p = PitchPoint::new(12.5, 70.0);
        assert_eq!(project(p, false), p);
        assert_eq!(Projector::identity().point(p), p);
    }

    #[test]
    fn test_mirror_projection() {
        let p = PitchPoint::new(100.0, 20.0);
        assert_eq!(project(p, true), PitchPoint::new(20.0, 60.0));
        assert_eq!(project(PitchPoint::new(60.0, 40.0), true), PitchPoint::new(60.0, 40.0));
    }

    #[test]
    fn test_try_project_rejects_out_of_bounds() {
        let off = PitchPoint::new(121.0, 40.0);
        assert_eq!(try_project(off, false), Err(ProjectionError::OutOfBounds(off)));
        assert!(try_project(PitchPoint::new(120.0, 80.0), true).is_ok());
    }

    #[test]
    fn test_projector_clamps_then_mirrors() {
        let projector = Projector::mirrored();
        let projected = projector.point(PitchPoint::new(-3.0, 85.0));
        assert_eq!(projected, PitchPoint::new(120.0, 0.0));
    }

    #[test]
    fn test_segment_keeps_pairing() {
        let projector = Projector::mirrored();
        let [start, end] = projector.segment(PitchPoint::new(10.0, 10.0), PitchPoint::new(50.0, 30.0));
        assert_eq!(start, PitchPoint::new(110.0, 70.0));
        assert_eq!(end, PitchPoint::new(70.0, 50.0));
    }

    #[test]
    fn test_opposite() {
        assert!(Projector::identity().opposite().is_mirrored());
        assert!(!Projector::mirrored().opposite().is_mirrored());
    }

    proptest! {
        /// Mirroring twice returns the original point
        #[test]
        fn prop_mirror_is_involution(x in 0.0f64..=120.0, y in 0.0f64..=80.0) {
            let p = PitchPoint::new(x, y);
            let back = project(project(p, true), true);
            prop_assert!((back.x - p.x).abs() < 1e-9);
            prop_assert!((back.y - p.y).abs() < 1e-9);
        }

        /// Projector output always lands on the pitch
        #[test]
        fn prop_projector_output_in_bounds(
            x in -200.0f64..300.0,
            y in -200.0f64..300.0,
            mirror in any::<bool>()
        ) {
            let out = Projector::new(mirror).point(PitchPoint::new(x, y));
            prop_assert!(out.is_valid());
        }
    }
}
