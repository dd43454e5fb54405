use super::super::state::{EditorTool, EraserMode};
use crate::core::StrokeColor;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer wurde gedrueckt ("begin"-Event des Hosts)
    PointerPressed { world_pos: glam::Vec2 },
    /// Pointer wurde bewegt ("continue"-Event, mit Button-Zustand)
    PointerMoved {
        world_pos: glam::Vec2,
        button_held: bool,
    },
    /// Pointer wurde losgelassen ("end"-Event)
    PointerReleased { world_pos: glam::Vec2 },

    /// Editor-Werkzeug wechseln (Stift oder Radierer)
    SetEditorToolRequested { tool: EditorTool },
    /// Untermodus des Radierers wechseln (partiell oder ganzer Stroke)
    SetEraserModeRequested { mode: EraserMode },
    /// Farbe fuer neue Strokes setzen
    SetPenColorRequested { color: StrokeColor },
    /// Strichbreite fuer neue Strokes setzen
    SetPenWidthRequested { width: f32 },
    /// Radius des Radier-Kreises setzen
    SetEraserRadiusRequested { radius: f32 },

    /// Gesamte Zeichnung verwerfen
    ClearSketchRequested,

    /// Optionen wurden im Host geaendert (anwenden und speichern)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zuruecksetzen
    ResetOptionsRequested,
}
