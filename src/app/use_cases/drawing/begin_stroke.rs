//! Use-Case: Neuen Stroke an einer Weltposition beginnen.

use crate::app::state::EnginePhase;
use crate::app::AppState;
use crate::core::Stroke;

/// Beginnt einen neuen Stroke mit dem Event-Punkt als Startpunkt.
///
/// Der Stroke erhaelt eine frische ID sowie die aktuelle Stiftfarbe und
/// -breite und wird als oberster in die Sammlung geschoben.
pub fn begin_stroke(state: &mut AppState, world_pos: glam::Vec2) {
    if state.editor.phase == EnginePhase::Drawing {
        // Host hat das End-Event verschluckt: vorherigen Stroke sauber beenden
        log::warn!("BeginStroke waehrend Drawing-Phase, vorheriger Stroke wird beendet");
        super::finish_stroke(state);
    }

    let id = state.editor.id_generator.next_id();
    let stroke = Stroke::begin(
        id.clone(),
        world_pos,
        state.editor.pen_color,
        state.editor.pen_width,
    );
    state.sketch_mut().push_stroke(stroke);

    state.editor.active_stroke_id = Some(id.clone());
    state.editor.phase = EnginePhase::Drawing;

    log::info!(
        "Stroke {} bei ({:.1}, {:.1}) begonnen",
        id,
        world_pos.x,
        world_pos.y
    );
}
