//! Use-Case: Obersten getroffenen Stroke komplett entfernen.

use crate::app::state::EnginePhase;
use crate::app::AppState;

/// Entfernt den obersten Stroke, dessen Polylinie den Event-Punkt im
/// Radius passiert. Trifft der Hit-Test nichts, bleibt die Sammlung
/// unveraendert.
pub fn erase_stroke_at(state: &mut AppState, world_pos: glam::Vec2, radius: f32) {
    state.editor.phase = EnginePhase::Erasing;

    let Some(hit) = state.sketch.find_stroke_at(world_pos, radius) else {
        log::debug!(
            "Kein Stroke im Radius {:.1} um ({:.1}, {:.1})",
            radius,
            world_pos.x,
            world_pos.y
        );
        return;
    };

    state.sketch_mut().remove_stroke(&hit);
    log::info!("Stroke {} entfernt", hit);
}
