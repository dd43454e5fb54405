//! Zentrale Konfiguration fuer den Whiteboard Stroke Editor.
//!
//! `EditorOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Mindestabstand (Welteinheiten) zwischen zwei uebernommenen Pointer-Samples.
pub const MIN_SAMPLE_DISTANCE: f32 = 3.0;
/// Standard-Strichbreite fuer neue Strokes.
pub const PEN_WIDTH_DEFAULT: f32 = 2.0;
/// Standard-Farbe neuer Strokes (RGBA: Schwarz).
pub const PEN_COLOR_DEFAULT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Radieren ────────────────────────────────────────────────────────

/// Standard-Radius des Radier-Kreises in Welteinheiten.
pub const ERASER_RADIUS_DEFAULT: f32 = 10.0;

// ── Ressourcen ──────────────────────────────────────────────────────

/// Warnschwelle fuer die Stroke-Anzahl: fortgesetztes partielles Radieren
/// erzeugt immer mehr Fragmente und fuegt sie nie wieder zusammen.
pub const STROKE_COUNT_WARN_THRESHOLD: u32 = 5000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Editor-Optionen.
/// Wird als `whiteboard_stroke_editor.toml` neben der Host-Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Zeichnen ────────────────────────────────────────────────
    /// Mindestabstand zwischen uebernommenen Pointer-Samples
    pub min_sample_distance: f32,
    /// Standard-Strichbreite neuer Strokes
    pub pen_width_default: f32,
    /// Standard-Farbe neuer Strokes (RGBA)
    pub pen_color_default: [f32; 4],

    // ── Radieren ────────────────────────────────────────────────
    /// Standard-Radius des Radier-Kreises
    pub eraser_radius_default: f32,

    // ── Ressourcen ──────────────────────────────────────────────
    /// Warnschwelle fuer die Stroke-Anzahl nach partiellem Radieren
    #[serde(default = "default_stroke_count_warn_threshold")]
    pub stroke_count_warn_threshold: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            min_sample_distance: MIN_SAMPLE_DISTANCE,
            pen_width_default: PEN_WIDTH_DEFAULT,
            pen_color_default: PEN_COLOR_DEFAULT,
            eraser_radius_default: ERASER_RADIUS_DEFAULT,
            stroke_count_warn_threshold: STROKE_COUNT_WARN_THRESHOLD,
        }
    }
}

/// Serde-Default fuer `stroke_count_warn_threshold` (Abwaertskompatibilitaet
/// bestehender TOML-Dateien).
fn default_stroke_count_warn_threshold() -> u32 {
    STROKE_COUNT_WARN_THRESHOLD
}

impl EditorOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("whiteboard_stroke_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("whiteboard_stroke_editor.toml")
    }
}
