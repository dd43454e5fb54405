//! Use-Case: Kreis aus allen Strokes herausradieren.

use crate::app::state::EnginePhase;
use crate::app::AppState;

/// Radiert den Radier-Kreis aus der gesamten Sammlung heraus.
///
/// Laeuft auf der dann aktuellen (moeglicherweise schon fragmentierten)
/// Sammlung und wird bei gehaltenem Button pro Continue-Event erneut
/// aufgerufen. Fragmente werden nie wieder zusammengefuegt; deshalb wird
/// beim Ueberschreiten der Warnschwelle geloggt.
pub fn erase_partial_at(state: &mut AppState, world_pos: glam::Vec2, radius: f32) {
    state.editor.phase = EnginePhase::Erasing;

    let result = state.sketch_mut().erase_circle(world_pos, radius);
    if !result.changed_anything() {
        return;
    }

    log::info!(
        "{} Stroke(s) gesplittet, {} entfernt, {} Fragment(e) erzeugt",
        result.split_strokes,
        result.removed_strokes,
        result.emitted_fragments
    );

    let stroke_count = state.sketch.stroke_count();
    let warn_threshold = state.options.stroke_count_warn_threshold as usize;
    if stroke_count > warn_threshold {
        log::warn!(
            "Stroke-Anzahl {} ueber Warnschwelle {}: fortgesetztes partielles Radieren erzeugt immer mehr Fragmente",
            stroke_count,
            warn_threshold
        );
    }
}
