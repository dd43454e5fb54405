//! Handler fuer die Radier-Commands.

use crate::app::state::EnginePhase;
use crate::app::use_cases;
use crate::app::AppState;

/// Entfernt den obersten getroffenen Stroke komplett.
pub fn erase_stroke_at(state: &mut AppState, world_pos: glam::Vec2, radius: f32) {
    use_cases::erasing::erase_stroke_at(state, world_pos, radius);
}

/// Radiert den Kreis aus allen Strokes heraus.
pub fn erase_partial_at(state: &mut AppState, world_pos: glam::Vec2, radius: f32) {
    use_cases::erasing::erase_partial_at(state, world_pos, radius);
}

/// Beendet den Radier-Vorgang (Pointer losgelassen).
pub fn finish_erase(state: &mut AppState) {
    state.editor.phase = EnginePhase::Idle;
}
