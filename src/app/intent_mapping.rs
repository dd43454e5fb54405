//! Mapping von Host-Intents auf mutierende App-Commands.
//!
//! Hier findet der Werkzeug-Dispatch statt: dasselbe Pointer-Event wird je
//! nach aktivem Werkzeug und Radierer-Untermodus zu unterschiedlichen
//! Commands. Der Radier-Radius wird beim Mapping aus dem Werkzeugzustand
//! eingefroren, damit der Command selbsttragend ist.

use super::state::{EditorTool, EraserMode};
use super::{AppCommand, AppIntent, AppState};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => match state.editor.active_tool {
            EditorTool::Pen => vec![AppCommand::BeginStroke { world_pos }],
            EditorTool::Eraser => vec![eraser_command(state, world_pos)],
        },
        AppIntent::PointerMoved {
            world_pos,
            button_held,
        } => {
            if !button_held {
                // Hover ohne gedrueckten Button mutiert nichts
                return Vec::new();
            }
            match state.editor.active_tool {
                EditorTool::Pen => vec![AppCommand::ExtendStroke { world_pos }],
                EditorTool::Eraser => vec![eraser_command(state, world_pos)],
            }
        }
        AppIntent::PointerReleased { .. } => match state.editor.active_tool {
            EditorTool::Pen => vec![AppCommand::FinishStroke],
            EditorTool::Eraser => vec![AppCommand::FinishErase],
        },

        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::SetEraserModeRequested { mode } => vec![AppCommand::SetEraserMode { mode }],
        AppIntent::SetPenColorRequested { color } => vec![AppCommand::SetPenColor { color }],
        AppIntent::SetPenWidthRequested { width } => vec![AppCommand::SetPenWidth { width }],
        AppIntent::SetEraserRadiusRequested { radius } => {
            vec![AppCommand::SetEraserRadius { radius }]
        }

        AppIntent::ClearSketchRequested => vec![AppCommand::ClearSketch],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Baut den Radier-Command fuer den aktuellen Untermodus.
fn eraser_command(state: &AppState, world_pos: glam::Vec2) -> AppCommand {
    let radius = state.editor.eraser_radius;
    match state.editor.eraser_mode {
        EraserMode::Stroke => AppCommand::EraseStrokeAt { world_pos, radius },
        EraserMode::Partial => AppCommand::ErasePartialAt { world_pos, radius },
    }
}
