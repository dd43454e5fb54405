//! Geteilte Typen fuer layer-uebergreifende Vertraege.
//!
//! Enthaelt Typen, die zwischen der Engine und einem einbettenden
//! Host (UI, Renderer) geteilt werden, um direkte Abhaengigkeiten
//! zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::{ERASER_RADIUS_DEFAULT, MIN_SAMPLE_DISTANCE, PEN_WIDTH_DEFAULT};
