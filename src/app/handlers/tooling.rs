//! Handler fuer Werkzeugwahl und Laufzeit-Konfiguration.

use crate::app::state::{EditorTool, EnginePhase, EraserMode};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::StrokeColor;
use crate::shared::EditorOptions;

/// Aktiviert ein Editor-Werkzeug.
///
/// Ein Werkzeugwechsel mitten im Zeichnen schliesst den wachsenden Stroke
/// vorher sauber ab.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    if state.editor.phase == EnginePhase::Drawing {
        use_cases::drawing::finish_stroke(state);
    }
    state.editor.active_tool = tool;
    state.editor.phase = EnginePhase::Idle;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Setzt den Untermodus des Radierers.
pub fn set_eraser_mode(state: &mut AppState, mode: EraserMode) {
    state.editor.eraser_mode = mode;
    log::info!("Radierer-Modus: {:?}", mode);
}

/// Setzt die Farbe fuer neue Strokes.
pub fn set_pen_color(state: &mut AppState, color: StrokeColor) {
    if color.iter().any(|channel| !channel.is_finite()) {
        log::warn!("Stiftfarbe mit nicht-finiten Kanaelen verworfen: {:?}", color);
        return;
    }
    state.editor.pen_color = color;
}

/// Setzt die Strichbreite fuer neue Strokes (muss positiv und endlich sein).
pub fn set_pen_width(state: &mut AppState, width: f32) {
    if !width.is_finite() || width <= 0.0 {
        log::warn!("Ungueltige Strichbreite verworfen: {}", width);
        return;
    }
    state.editor.pen_width = width;
    log::info!("Strichbreite: {:.1}", width);
}

/// Setzt den Radius des Radier-Kreises (darf nicht negativ sein).
pub fn set_eraser_radius(state: &mut AppState, radius: f32) {
    if !radius.is_finite() || radius < 0.0 {
        log::warn!("Ungueltiger Radier-Radius verworfen: {}", radius);
        return;
    }
    state.editor.eraser_radius = radius;
    log::info!("Radier-Radius: {:.1}", radius);
}

/// Verwirft die gesamte Zeichnung und setzt die Session-Phase zurueck.
pub fn clear_sketch(state: &mut AppState) {
    let removed = state.stroke_count();
    state.sketch_mut().clear();
    state.editor.active_stroke_id = None;
    state.editor.phase = EnginePhase::Idle;
    log::info!("Sketch geleert ({} Strokes entfernt)", removed);
}

/// Wendet neue Optionen an und speichert sie persistent.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}

/// Setzt die Optionen auf Standardwerte zurueck und speichert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}
