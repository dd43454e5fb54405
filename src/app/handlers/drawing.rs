//! Handler fuer die Zeichen-Commands.

use crate::app::use_cases;
use crate::app::AppState;

/// Beginnt einen neuen Stroke an der uebergebenen Weltposition.
pub fn begin_stroke(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::drawing::begin_stroke(state, world_pos);
}

/// Verlaengert den aktiven Stroke um einen Pointer-Sample.
pub fn extend_stroke(state: &mut AppState, world_pos: glam::Vec2) {
    use_cases::drawing::extend_stroke(state, world_pos);
}

/// Schliesst den aktiven Stroke ab.
pub fn finish_stroke(state: &mut AppState) {
    use_cases::drawing::finish_stroke(state);
}
