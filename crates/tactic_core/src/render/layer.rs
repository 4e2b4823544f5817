//! Drawable primitives handed to the rendering sink.
//!
//! A [`Figure`] is an ordered list of [`Layer`]s. Each layer is either a
//! marker group or a set of polylines, tagged with a legend group and a
//! default visibility. Coordinates are already projected.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::pitch::PitchPoint;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    Circle,
    CircleOpen,
    Diamond,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dash {
    Solid,
    Dot,
    DashDot,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MarkerStyle {
    pub size: f64,
    pub shape: MarkerShape,
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    #[serde(default = "default_dash")]
    pub dash: Dash,
}

fn default_opacity() -> f64 {
    1.0
}

fn default_dash() -> Dash {
    Dash::Solid
}

impl MarkerStyle {
    pub fn new(size: f64, shape: MarkerShape, color: impl Into<String>, opacity: f64) -> Self {
        Self { size, shape, color: color.into(), opacity }
    }
}

impl LineStyle {
    pub fn new(color: impl Into<String>, width: f64, dash: Dash) -> Self {
        Self { color: color.into(), width, dash }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Markers {
        points: Vec<PitchPoint>,
        marker: MarkerStyle,
    },
    /// Each entry is one independent polyline
    Lines {
        segments: Vec<Vec<PitchPoint>>,
        line: LineStyle,
    },
}

impl Geometry {
    pub fn point_count(&self) -> usize {
        match self {
            Geometry::Markers { points, .. } => points.len(),
            Geometry::Lines { segments, .. } => segments.iter().map(Vec::len).sum(),
        }
    }
}

/// Initial visibility of a layer in the sink.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Visible,
    /// Listed in the legend but not drawn until toggled on
    LegendOnly,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Layer {
    pub name: String,
    pub legend_group: String,
    pub show_legend: bool,
    #[serde(default)]
    pub visibility: Visibility,
    pub geometry: Geometry,
}

impl Layer {
    pub fn markers(
        name: impl Into<String>,
        legend_group: impl Into<String>,
        points: Vec<PitchPoint>,
        marker: MarkerStyle,
    ) -> Self {
        Self::new(name, legend_group, Geometry::Markers { points, marker })
    }

    pub fn lines(
        name: impl Into<String>,
        legend_group: impl Into<String>,
        segments: Vec<Vec<PitchPoint>>,
        line: LineStyle,
    ) -> Self {
        Self::new(name, legend_group, Geometry::Lines { segments, line })
    }

    fn new(name: impl Into<String>, legend_group: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            legend_group: legend_group.into(),
            show_legend: true,
            visibility: Visibility::Visible,
            geometry,
        }
    }

    /// Toggled together with its legend group but gets no legend entry.
    pub fn without_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    pub fn legend_only(mut self) -> Self {
        self.visibility = Visibility::LegendOnly;
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiagramKind {
    TacticPlot,
    Formation,
}

/// One diagram for the rendering sink.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Figure {
    pub title: String,
    pub kind: DiagramKind,
    pub layers: Vec<Layer>,
}

impl Figure {
    pub fn new(title: impl Into<String>, kind: DiagramKind) -> Self {
        Self { title: title.into(), kind, layers: Vec::new() }
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_json_shape() {
        let layer = Layer::markers(
            "defense-success",
            "defense-success",
            vec![PitchPoint::new(10.0, 20.0)],
            MarkerStyle::new(6.0, MarkerShape::Diamond, "darkgreen", 0.8),
        );
        let json = serde_json::to_value(&layer).unwrap();

        assert_eq!(json["geometry"]["type"], "markers");
        assert_eq!(json["geometry"]["marker"]["shape"], "diamond");
        assert_eq!(json["geometry"]["points"][0]["x"], 10.0);
        assert_eq!(json["visibility"], "visible");
        assert_eq!(json["show_legend"], true);
    }

    #[test]
    fn test_builder_flags() {
        let layer = Layer::lines(
            "tactical shift 46:0",
            "formation",
            vec![],
            LineStyle::new("tan", 1.0, Dash::DashDot),
        )
        .without_legend()
        .legend_only();

        assert!(!layer.show_legend);
        assert_eq!(layer.visibility, Visibility::LegendOnly);
        assert_eq!(serde_json::to_value(&layer).unwrap()["geometry"]["line"]["dash"], "dash_dot");
    }

    #[test]
    fn test_point_count() {
        let lines = Geometry::Lines {
            segments: vec![
                vec![PitchPoint::new(0.0, 0.0), PitchPoint::new(1.0, 1.0)],
                vec![PitchPoint::new(2.0, 2.0); 3],
            ],
            line: LineStyle::new("black", 1.0, Dash::Solid),
        };
        assert_eq!(lines.point_count(), 5);
    }

    #[test]
    fn test_figure_lookup() {
        let mut figure = Figure::new("Spain Tactic Plot", DiagramKind::TacticPlot);
        figure.push(Layer::markers("a", "g", vec![], MarkerStyle::new(1.0, MarkerShape::Circle, "red", 1.0)));
        figure.push(Layer::markers("b", "g", vec![], MarkerStyle::new(1.0, MarkerShape::Circle, "red", 1.0)));

        assert_eq!(figure.layer_names(), vec!["a", "b"]);
        assert!(figure.layer("b").is_some());
        assert!(figure.layer("c").is_none());
    }

    #[test]
    fn test_missing_style_defaults() {
        let style: MarkerStyle = serde_json::from_str(r#"{"size": 8, "shape": "circle", "color": "grey"}"#).unwrap();
        assert_eq!(style.opacity, 1.0);
        let line: LineStyle = serde_json::from_str(r#"{"color": "tan", "width": 0.7}"#).unwrap();
        assert_eq!(line.dash, Dash::Solid);
    }
}
