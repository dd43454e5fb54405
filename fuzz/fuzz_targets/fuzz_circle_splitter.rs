//! Fuzz-Target fuer den Kreis-Splitter: beliebige endliche Polylinien und
//! Radier-Kreise duerfen die Fragment-Invarianten nie verletzen.

#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use whiteboard_stroke_editor::{split_by_circle, Stroke, StrokeId};

/// Liest f32-Paare aus dem Fuzz-Input und verwirft nicht-finite Werte.
fn decode_points(data: &[u8]) -> Vec<Vec2> {
    data.chunks_exact(8)
        .filter_map(|chunk| {
            let x = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let y = f32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            (x.is_finite() && y.is_finite()).then_some(Vec2::new(x, y))
        })
        .take(256)
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let mut points = decode_points(data);
    if points.len() < 3 {
        return;
    }

    // Erster Punkt wird zum Kreiszentrum, letzte Koordinate zum Radius
    let center = points.remove(0);
    let radius = points.pop().map(|p| p.x.abs().min(1.0e6)).unwrap_or(1.0);

    let stroke = Stroke {
        id: StrokeId::new("fuzz"),
        points,
        color: [0.0, 0.0, 0.0, 1.0],
        width: 2.0,
    };

    let fragments = split_by_circle(&stroke, center, radius);

    let untouched = fragments.len() == 1 && fragments[0].id == stroke.id;
    if untouched {
        assert_eq!(fragments[0].points, stroke.points);
        return;
    }

    let mut seen_ids = std::collections::HashSet::new();
    for fragment in &fragments {
        assert!(
            fragment.points.len() >= 2,
            "Fragment mit weniger als 2 Punkten emittiert"
        );
        assert_eq!(fragment.color, stroke.color);
        assert_eq!(fragment.width, stroke.width);
        assert!(
            seen_ids.insert(fragment.id.clone()),
            "Fragment-ID doppelt vergeben"
        );
        assert!(
            fragment.id.as_str().starts_with(stroke.id.as_str()),
            "Fragment-ID nicht vom Original abgeleitet"
        );
    }
});
