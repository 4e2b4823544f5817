//! # Render Module
//!
//! Turns classified, projected match data into ordered layer lists for a
//! rendering sink. Nothing here draws; the output is plain data.
//!
//! - `layer` - Figure / layer / style primitives and their JSON schema
//! - `style` - Configurable colors and sizes
//! - `tactic_plot` - Shots, trails, defense and opponent context
//! - `formation_plot` - Starting XI and tactical shifts
//! - `sink` - Consumers of finished figures

pub mod formation_plot;
pub mod layer;
pub mod sink;
pub mod style;
pub mod tactic_plot;

pub use formation_plot::{formation_plot, formation_title};
pub use layer::{Dash, DiagramKind, Figure, Geometry, Layer, LineStyle, MarkerShape, MarkerStyle, Visibility};
pub use sink::{CollectSink, FigureSink, JsonLinesSink};
pub use style::PlotStyle;
pub use tactic_plot::{tactic_plot, tactic_plot_title};

/// JSON Schema of the figure document handed to the sink.
pub fn figure_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(Figure)
}
