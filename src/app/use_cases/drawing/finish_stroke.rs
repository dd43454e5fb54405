//! Use-Case: Wachsenden Stroke abschliessen.

use crate::app::state::EnginePhase;
use crate::app::AppState;
use crate::core::Stroke;

/// Schliesst den aktiven Stroke ab; danach wird er nicht mehr mutiert.
///
/// Ein Stroke, der beim Abschluss noch keinen zweiten Punkt hat (Klick ohne
/// Bewegung), darf die Operation nicht ueberleben und wird entfernt.
pub fn finish_stroke(state: &mut AppState) {
    let finished = state.editor.active_stroke_id.take();
    state.editor.phase = EnginePhase::Idle;

    let Some(id) = finished else {
        return;
    };

    let point_count = state.sketch.find_stroke(&id).map_or(0, Stroke::point_count);
    if point_count < 2 {
        state.sketch_mut().remove_stroke(&id);
        log::info!("Stroke {} ohne zweiten Punkt verworfen", id);
    } else {
        log::info!("Stroke {} mit {} Punkten abgeschlossen", id, point_count);
    }
}
