//! Use-Case: Wachsenden Stroke um einen Pointer-Sample verlaengern.

use crate::app::state::EnginePhase;
use crate::app::AppState;
use crate::core::should_append_point;

/// Haengt den Sample an den aktiven Stroke an, sofern er den Mindestabstand
/// zum letzten Punkt einhaelt. Zu dichte Samples werden verworfen.
pub fn extend_stroke(state: &mut AppState, world_pos: glam::Vec2) {
    if state.editor.phase != EnginePhase::Drawing {
        log::debug!("ExtendStroke ausserhalb der Drawing-Phase ignoriert");
        return;
    }

    let Some(id) = state.editor.active_stroke_id.clone() else {
        return;
    };
    let min_distance = state.options.min_sample_distance;

    let sketch = state.sketch_mut();
    let Some(stroke) = sketch.find_stroke_mut(&id) else {
        log::warn!("Aktiver Stroke {} nicht mehr in der Sammlung", id);
        return;
    };
    let Some(last) = stroke.last_point() else {
        return;
    };

    if should_append_point(last, world_pos, min_distance) {
        stroke.append_point(world_pos);
    }
}
