//! Whiteboard Stroke Editor Library.
//! Stroke-Editing-Engine als Library exportiert fuer Tests und Einbettung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, EnginePhase,
    EraserMode,
};
pub use core::{
    point_segment_distance, segment_circle_intersections, should_append_point, split_by_circle,
};
pub use core::{PartialEraseResult, Sketch, Stroke, StrokeColor, StrokeId, StrokeIdGenerator};
pub use shared::EditorOptions;
