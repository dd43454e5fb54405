//! Die zentrale Sketch-Datenstruktur: geordnete Sammlung aller Strokes.

use glam::Vec2;

use super::eraser::split_by_circle;
use super::geometry::point_segment_distance;
use super::stroke::{Stroke, StrokeId};

/// Geordnete Sammlung aller Strokes einer Session.
///
/// Die Einfuegereihenfolge ist zugleich die Mal-Reihenfolge:
/// zuerst gezeichnet = unten, zuletzt gezeichnet = oben. Keine zwei
/// lebenden Strokes tragen dieselbe ID.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    strokes: Vec<Stroke>,
}

/// Ergebnis eines partiellen Radier-Durchgangs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialEraseResult {
    /// Anzahl der vom Kreis beruehrten Strokes
    pub split_strokes: u32,
    /// Anzahl komplett verschwundener Strokes
    pub removed_strokes: u32,
    /// Anzahl neu entstandener Fragmente
    pub emitted_fragments: u32,
}

impl PartialEraseResult {
    /// Prueft ob der Durchgang die Sammlung veraendert hat.
    pub fn changed_anything(&self) -> bool {
        self.split_strokes > 0
    }
}

impl Sketch {
    /// Erstellt eine leere Sammlung.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Fuegt einen Stroke als obersten ein.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        debug_assert!(
            self.find_stroke(&stroke.id).is_none(),
            "Stroke-ID doppelt vergeben"
        );
        self.strokes.push(stroke);
    }

    /// Sucht einen Stroke per ID (read-only).
    pub fn find_stroke(&self, id: &StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|stroke| &stroke.id == id)
    }

    /// Mutable Sicht auf einen Stroke per ID.
    pub(crate) fn find_stroke_mut(&mut self, id: &StrokeId) -> Option<&mut Stroke> {
        self.strokes.iter_mut().find(|stroke| &stroke.id == id)
    }

    /// Entfernt einen Stroke komplett (gibt `true` zurueck falls gefunden).
    pub fn remove_stroke(&mut self, id: &StrokeId) -> bool {
        let before = self.strokes.len();
        self.strokes.retain(|stroke| &stroke.id != id);
        self.strokes.len() < before
    }

    /// Leert die Sammlung.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Iterator ueber alle Strokes von unten nach oben (read-only).
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// Gibt die Anzahl der Strokes zurueck.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Summe aller Punkte (fuer Status-Anzeige und Wachstums-Warnung).
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|stroke| stroke.points.len()).sum()
    }

    /// Gibt `true` zurueck, wenn keine Strokes vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Findet den obersten Stroke, dessen Polylinie den Punkt im Radius passiert.
    ///
    /// Scannt von zuletzt zu zuerst gezeichnet; der erste Treffer gewinnt,
    /// damit bei Ueberlappung der sichtbar oberste Stroke gemeldet wird.
    /// Treffer-Schwelle pro Stroke: `radius + width / 2`.
    pub fn find_stroke_at(&self, point: Vec2, radius: f32) -> Option<StrokeId> {
        for stroke in self.strokes.iter().rev() {
            let threshold = radius + stroke.width / 2.0;
            for pair in stroke.points.windows(2) {
                if point_segment_distance(point, pair[0], pair[1]) <= threshold {
                    return Some(stroke.id.clone());
                }
            }
        }
        None
    }

    /// Radiert einen Kreis aus allen Strokes heraus.
    ///
    /// Jeder Stroke wird durch seine Split-Fragmente ersetzt; die relative
    /// Reihenfolge bleibt erhalten. Unberuehrte Strokes laufen identisch
    /// (gleiche ID, gleiche Punkte) durch. Fragmente werden nie wieder
    /// zusammengefuegt.
    pub fn erase_circle(&mut self, center: Vec2, radius: f32) -> PartialEraseResult {
        let mut result = PartialEraseResult::default();
        let mut survivors: Vec<Stroke> = Vec::with_capacity(self.strokes.len());

        for stroke in &self.strokes {
            let fragments = split_by_circle(stroke, center, radius);

            let untouched = fragments.len() == 1 && fragments[0].id == stroke.id;
            if !untouched {
                result.split_strokes += 1;
                result.emitted_fragments += fragments.len() as u32;
                if fragments.is_empty() {
                    result.removed_strokes += 1;
                }
            }

            survivors.extend(fragments);
        }

        self.strokes = survivors;
        result
    }
}
