use super::super::state::{EditorTool, EraserMode};
use crate::core::StrokeColor;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgefuehrt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Neuen Stroke an der Weltposition beginnen
    BeginStroke { world_pos: glam::Vec2 },
    /// Wachsenden Stroke um einen Pointer-Sample verlaengern
    ExtendStroke { world_pos: glam::Vec2 },
    /// Wachsenden Stroke abschliessen
    FinishStroke,

    // ── Radieren ────────────────────────────────────────────────
    /// Obersten getroffenen Stroke komplett entfernen
    EraseStrokeAt {
        world_pos: glam::Vec2,
        radius: f32,
    },
    /// Kreis aus allen Strokes herausradieren
    ErasePartialAt {
        world_pos: glam::Vec2,
        radius: f32,
    },
    /// Radier-Vorgang beenden (Pointer losgelassen)
    FinishErase,

    // ── Werkzeug & Konfiguration ────────────────────────────────
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Untermodus des Radierers setzen
    SetEraserMode { mode: EraserMode },
    /// Farbe fuer neue Strokes setzen
    SetPenColor { color: StrokeColor },
    /// Strichbreite fuer neue Strokes setzen
    SetPenWidth { width: f32 },
    /// Radius des Radier-Kreises setzen
    SetEraserRadius { radius: f32 },
    /// Gesamte Zeichnung verwerfen
    ClearSketch,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zuruecksetzen
    ResetOptions,
}
