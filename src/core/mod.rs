//! Core-Domaenentypen: Strokes, Sketch, Geometrie und Kreis-Splitter.

pub mod eraser;
pub mod geometry;
pub mod sketch;
/// Core-Datenmodelle der Stroke-Engine
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Sketch: geordnete Sammlung aller Strokes
/// - Stroke: einzelne Freihand-Polylinie mit Farbe und Breite
pub mod stroke;

pub use eraser::split_by_circle;
pub use geometry::{
    is_outside_circle, point_segment_distance, segment_circle_intersections, should_append_point,
};
pub use sketch::{PartialEraseResult, Sketch};
pub use stroke::{Stroke, StrokeColor, StrokeId, StrokeIdGenerator};
