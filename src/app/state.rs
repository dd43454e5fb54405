//! Application State — zentrale Datenhaltung.

use std::sync::Arc;

use crate::core::{Sketch, StrokeColor, StrokeId, StrokeIdGenerator};
use crate::shared::EditorOptions;

use super::CommandLog;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Freihand zeichnen
    #[default]
    Pen,
    /// Radieren (partiell oder ganzer Stroke)
    Eraser,
}

/// Untermodus des Radierers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EraserMode {
    /// Kreis aus den Strokes herausschneiden
    #[default]
    Partial,
    /// Ganzen getroffenen Stroke entfernen
    Stroke,
}

/// Phase der Editier-Session.
///
/// `Erasing` ist re-entrant: jedes Pressed/Moved-Event mit aktivem Radierer
/// fuehrt den Radier-Schritt erneut auf der dann aktuellen Sammlung aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnginePhase {
    /// Kein Pointer aktiv
    #[default]
    Idle,
    /// Stift unten, Stroke waechst
    Drawing,
    /// Radierer aktiv
    Erasing,
}

/// Zustand des aktuellen Editor-Werkzeugs
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Untermodus des Radierers
    pub eraser_mode: EraserMode,
    /// Farbe fuer neue Strokes
    pub pen_color: StrokeColor,
    /// Strichbreite fuer neue Strokes
    pub pen_width: f32,
    /// Radius des Radier-Kreises
    pub eraser_radius: f32,
    /// Aktuelle Session-Phase
    pub phase: EnginePhase,
    /// ID des gerade wachsenden Strokes (nur in `Drawing` gesetzt)
    pub active_stroke_id: Option<StrokeId>,
    /// Laufende ID-Vergabe fuer neue Strokes
    pub id_generator: StrokeIdGenerator,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand aus den Optionen (Stift aktiv).
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            active_tool: EditorTool::Pen,
            eraser_mode: EraserMode::Partial,
            pen_color: options.pen_color_default,
            pen_width: options.pen_width_default,
            eraser_radius: options.eraser_radius_default,
            phase: EnginePhase::Idle,
            active_stroke_id: None,
            id_generator: StrokeIdGenerator::new(),
        }
    }
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Stroke-Sammlung (Arc: Host/Renderer halten O(1)-Snapshots)
    pub sketch: Arc<Sketch>,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Abstaende, Defaults, Warnschwellen)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den uebergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            sketch: Arc::new(Sketch::new()),
            editor: EditorToolState::from_options(&options),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt eine mutable Referenz auf den Sketch zurueck (CoW: klont nur,
    /// wenn ein Host-Snapshot den vorherigen Zustand noch haelt).
    ///
    /// Alle Mutationen der Sammlung gehen ueber diese Methode, damit
    /// ausgegebene Snapshots unveraendert bleiben.
    #[inline]
    pub fn sketch_mut(&mut self) -> &mut Sketch {
        Arc::make_mut(&mut self.sketch)
    }

    /// Gibt die Anzahl der Strokes zurueck (fuer Status-Anzeige).
    pub fn stroke_count(&self) -> usize {
        self.sketch.stroke_count()
    }

    /// Gibt die Gesamtanzahl aller Punkte zurueck (fuer Status-Anzeige).
    pub fn point_count(&self) -> usize {
        self.sketch.point_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
