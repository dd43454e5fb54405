//! Repraesentiert einen Freihand-Stroke als Polylinie mit Identitaet.

use glam::Vec2;

/// RGBA-Farbe eines Strokes
pub type StrokeColor = [f32; 4];

/// Eindeutiger String-Identifier eines Strokes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrokeId(String);

impl StrokeId {
    /// Erstellt eine ID aus einem beliebigen String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Leitet die ID eines Radier-Fragments ab (`<parent>.<ordinal>`, 1-basiert).
    ///
    /// Die Eltern-ID wird beim Split verworfen und nie wieder vergeben,
    /// daher bleiben abgeleitete IDs ueber die ganze Session eindeutig.
    pub fn derive_fragment(&self, ordinal: usize) -> Self {
        Self(format!("{}.{}", self.0, ordinal))
    }

    /// String-Sicht auf die ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Laufende Vergabe frischer Stroke-IDs innerhalb einer Session.
#[derive(Debug, Default)]
pub struct StrokeIdGenerator {
    counter: u64,
}

impl StrokeIdGenerator {
    /// Erstellt einen Generator, der bei `s1` beginnt.
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Liefert die naechste freie ID (`s1`, `s2`, ...).
    pub fn next_id(&mut self) -> StrokeId {
        self.counter += 1;
        StrokeId(format!("s{}", self.counter))
    }
}

/// Ein Freihand-Stroke: Polylinie mit Farbe und Breite
#[derive(Debug, Clone)]
pub struct Stroke {
    /// Eindeutige ID innerhalb der Session
    pub id: StrokeId,
    /// Punkte in Zeichenreihenfolge (= Polylinienreihenfolge)
    pub points: Vec<Vec2>,
    /// RGBA-Farbe
    pub color: StrokeColor,
    /// Strichbreite (positiv)
    pub width: f32,
}

impl Stroke {
    /// Erstellt einen neuen Stroke mit genau einem Startpunkt.
    pub fn begin(id: StrokeId, start: Vec2, color: StrokeColor, width: f32) -> Self {
        Self {
            id,
            points: vec![start],
            color,
            width,
        }
    }

    /// Erstellt ein Radier-Fragment mit abgeleiteter ID und Eltern-Farbe/-Breite.
    pub fn fragment(&self, ordinal: usize, points: Vec<Vec2>) -> Self {
        Self {
            id: self.id.derive_fragment(ordinal),
            points,
            color: self.color,
            width: self.width,
        }
    }

    /// Haengt einen Punkt ans Ende der Polylinie an.
    pub fn append_point(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Letzter Punkt der Polylinie.
    pub fn last_point(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Anzahl der Punkte.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn der Stroke als Linie darstellbar ist (mindestens 2 Punkte).
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_produces_sequential_ids() {
        let mut generator = StrokeIdGenerator::new();
        assert_eq!(generator.next_id().as_str(), "s1");
        assert_eq!(generator.next_id().as_str(), "s2");
        assert_eq!(generator.next_id().as_str(), "s3");
    }

    #[test]
    fn fragment_ids_derive_from_parent() {
        let id = StrokeId::new("s7");
        assert_eq!(id.derive_fragment(1).as_str(), "s7.1");
        assert_eq!(id.derive_fragment(2).as_str(), "s7.2");
        // Wiederholtes Splitten verlaengert den Pfad, kollidiert aber nie
        assert_eq!(id.derive_fragment(1).derive_fragment(3).as_str(), "s7.1.3");
    }

    #[test]
    fn begin_seeds_single_point() {
        let stroke = Stroke::begin(
            StrokeId::new("s1"),
            Vec2::new(1.0, 2.0),
            [0.0, 0.0, 0.0, 1.0],
            2.0,
        );
        assert_eq!(stroke.point_count(), 1);
        assert!(!stroke.is_drawable());
        assert_eq!(stroke.last_point(), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn fragment_inherits_color_and_width() {
        let stroke = Stroke::begin(
            StrokeId::new("s1"),
            Vec2::ZERO,
            [1.0, 0.0, 0.0, 1.0],
            4.0,
        );
        let fragment = stroke.fragment(1, vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]);
        assert_eq!(fragment.id.as_str(), "s1.1");
        assert_eq!(fragment.color, stroke.color);
        assert_eq!(fragment.width, stroke.width);
        assert!(fragment.is_drawable());
    }
}
