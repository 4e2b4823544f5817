use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pitch length along x (StatsBomb grid units).
pub const PITCH_LENGTH: f64 = 120.0;

/// Pitch width along y.
pub const PITCH_WIDTH: f64 = 80.0;

/// Point on the 120x80 event grid.
/// - x: 0 = own goal line, 120 = opponent goal line
/// - y: 0 = top touchline, 80 = bottom touchline
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct PitchPoint {
    pub x: f64,
    pub y: f64,
}

impl PitchPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Inside the pitch box, edges included.
    pub fn is_valid(&self) -> bool {
        (0.0..=PITCH_LENGTH).contains(&self.x) && (0.0..=PITCH_WIDTH).contains(&self.y)
    }

    /// Nearest in-bounds point.
    pub fn clamped(&self) -> Self {
        Self {
            x: self.x.clamp(0.0, PITCH_LENGTH),
            y: self.y.clamp(0.0, PITCH_WIDTH),
        }
    }
}

/// Event location as it appears in the feed: `[x, y]` or `[x, y, z]`.
/// Shot end locations carry a height component which the board ignores.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Location(PitchPoint);

impl Location {
    pub const fn new(x: f64, y: f64) -> Self {
        Self(PitchPoint::new(x, y))
    }

    pub fn point(&self) -> PitchPoint {
        self.0
    }
}

impl TryFrom<Vec<f64>> for Location {
    type Error = String;

    fn try_from(coords: Vec<f64>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            [x, y] | [x, y, _] if x.is_finite() && y.is_finite() => Ok(Location::new(*x, *y)),
            other => Err(format!("expected [x, y] or [x, y, z], got {other:?}")),
        }
    }
}

impl From<Location> for Vec<f64> {
    fn from(loc: Location) -> Self {
        vec![loc.0.x, loc.0.y]
    }
}

impl From<Location> for PitchPoint {
    fn from(loc: Location) -> Self {
        loc.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_point_validation() {
        assert!(PitchPoint::new(60.0, 40.0).is_valid());
        assert!(PitchPoint::new(0.0, 0.0).is_valid());
        assert!(PitchPoint::new(120.0, 80.0).is_valid());
        assert!(!PitchPoint::new(120.1, 40.0).is_valid());
        assert!(!PitchPoint::new(60.0, -0.5).is_valid());
    }

    #[test]
    fn test_clamped_is_nearest_edge() {
        let p = PitchPoint::new(130.0, -4.0).clamped();
        assert_eq!(p, PitchPoint::new(120.0, 0.0));
        assert_eq!(PitchPoint::new(12.5, 33.0).clamped(), PitchPoint::new(12.5, 33.0));
    }

    #[test]
    fn test_location_accepts_2d_and_3d() {
        let loc: Location = serde_json::from_str("[61.0, 40.1]").unwrap();
        assert_eq!(loc.point(), PitchPoint::new(61.0, 40.1));

        let shot_end: Location = serde_json::from_str("[120.0, 38.2, 1.4]").unwrap();
        assert_eq!(shot_end.point(), PitchPoint::new(120.0, 38.2));

        assert!(serde_json::from_str::<Location>("[1.0]").is_err());
        assert!(serde_json::from_str::<Location>("[1.0, 2.0, 3.0, 4.0]").is_err());
    }
}
