//! Colors, marker sizes and line styles for both diagrams.
//!
//! Every field has a default, so a config file only needs to list what it
//! overrides.

use serde::{Deserialize, Serialize};

use super::layer::{Dash, LineStyle, MarkerShape, MarkerStyle};
use crate::error::ConfigError;

pub const GOAL_COLOR: &str = "sienna";
pub const NO_GOAL_COLOR: &str = "goldenrod";
pub const CARRY_COLOR: &str = "gainsboro";
pub const DEFENSE_COLOR: &str = "darkgreen";
pub const DEFENSE_NO_COLOR: &str = "yellowgreen";
pub const PASS_COLOR: &str = "rgb(26,26,26)";
pub const STARTING_COLOR: &str = "grey";
pub const SHIFT_COLOR: &str = "tan";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlotStyle {
    pub opponent_carry: LineStyle,
    pub pass_end: MarkerStyle,
    pub pass_start: MarkerStyle,
    pub pass_connector: LineStyle,
    pub non_goal_shot: MarkerStyle,
    pub goal_shot: MarkerStyle,
    pub non_goal_trail_marker: MarkerStyle,
    pub non_goal_trail_line: LineStyle,
    pub goal_trail_marker: MarkerStyle,
    pub goal_trail_line: LineStyle,
    pub defense_success: MarkerStyle,
    pub defense_failure: MarkerStyle,
    pub formation_starting: MarkerStyle,
    pub formation_shift: MarkerStyle,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            opponent_carry: LineStyle::new(CARRY_COLOR, 1.6, Dash::DashDot),
            pass_end: MarkerStyle::new(6.0, MarkerShape::CircleOpen, PASS_COLOR, 0.9),
            pass_start: MarkerStyle::new(3.0, MarkerShape::CircleOpen, PASS_COLOR, 0.6),
            pass_connector: LineStyle::new(PASS_COLOR, 0.3, Dash::Dot),
            non_goal_shot: MarkerStyle::new(7.0, MarkerShape::Circle, NO_GOAL_COLOR, 1.0),
            goal_shot: MarkerStyle::new(9.0, MarkerShape::Circle, GOAL_COLOR, 1.0),
            non_goal_trail_marker: MarkerStyle::new(6.0, MarkerShape::Circle, NO_GOAL_COLOR, 0.3),
            non_goal_trail_line: LineStyle::new(NO_GOAL_COLOR, 0.7, Dash::Solid),
            goal_trail_marker: MarkerStyle::new(6.0, MarkerShape::Circle, GOAL_COLOR, 0.3),
            goal_trail_line: LineStyle::new(GOAL_COLOR, 1.2, Dash::Solid),
            defense_success: MarkerStyle::new(6.0, MarkerShape::Diamond, DEFENSE_COLOR, 0.8),
            defense_failure: MarkerStyle::new(6.0, MarkerShape::Diamond, DEFENSE_NO_COLOR, 0.8),
            formation_starting: MarkerStyle::new(8.0, MarkerShape::Circle, STARTING_COLOR, 1.0),
            formation_shift: MarkerStyle::new(8.0, MarkerShape::Circle, SHIFT_COLOR, 1.0),
        }
    }
}

impl PlotStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("pass_end", &self.pass_end),
            ("pass_start", &self.pass_start),
            ("non_goal_shot", &self.non_goal_shot),
            ("goal_shot", &self.goal_shot),
            ("non_goal_trail_marker", &self.non_goal_trail_marker),
            ("goal_trail_marker", &self.goal_trail_marker),
            ("defense_success", &self.defense_success),
            ("defense_failure", &self.defense_failure),
            ("formation_starting", &self.formation_starting),
            ("formation_shift", &self.formation_shift),
        ];
        for (name, marker) in markers {
            if !(marker.size > 0.0) {
                return Err(ConfigError::Invalid(format!("style.{name}.size must be positive")));
            }
            if !(0.0..=1.0).contains(&marker.opacity) {
                return Err(ConfigError::Invalid(format!("style.{name}.opacity must be within 0..=1")));
            }
        }

        let lines = [
            ("opponent_carry", &self.opponent_carry),
            ("pass_connector", &self.pass_connector),
            ("non_goal_trail_line", &self.non_goal_trail_line),
            ("goal_trail_line", &self.goal_trail_line),
        ];
        for (name, line) in lines {
            if !(line.width > 0.0) {
                return Err(ConfigError::Invalid(format!("style.{name}.width must be positive")));
            }
        }
        Ok(())
    }
}
