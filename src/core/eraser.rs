//! Kreis-Splitter: zerlegt einen Stroke entlang eines Radier-Kreises.

use glam::Vec2;

use super::geometry::{is_outside_circle, segment_circle_intersections};
use super::stroke::Stroke;

/// Zerlegt einen Stroke entlang des Radier-Kreises in ueberlebende Fragmente.
///
/// Beruehrt der Kreis den Stroke nirgends, kommt der Stroke unveraendert
/// (inklusive seiner ID) als einziges Fragment zurueck. Andernfalls entstehen
/// 0..n neue Strokes mit abgeleiteten IDs und identischer Farbe/Breite; die
/// Schnittpunkte mit der Kreislinie werden zu Randpunkten der Fragmente.
///
/// Strokes mit weniger als 2 Punkten werden unveraendert durchgereicht,
/// statt Sub-Segment-Geometrie auf einer degenerierten Polylinie zu versuchen.
pub fn split_by_circle(stroke: &Stroke, center: Vec2, radius: f32) -> Vec<Stroke> {
    if stroke.points.len() < 2 {
        return vec![stroke.clone()];
    }

    let mut runs: Vec<Vec<Vec2>> = Vec::new();
    let mut run: Vec<Vec2> = Vec::new();
    let mut touched = false;

    let first = stroke.points[0];
    if is_outside_circle(first, center, radius) {
        run.push(first);
    } else {
        touched = true;
    }

    for pair in stroke.points.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let hits = segment_circle_intersections(prev, next, center, radius);
        let next_outside = is_outside_circle(next, center, radius);

        if hits.is_empty() {
            if next_outside {
                run.push(next);
            } else {
                // Segment taucht ohne erkennbare Wurzel in den Kreis ein
                // (prev lag auf oder unmittelbar an der Kreislinie)
                touched = true;
                close_run(&mut runs, &mut run);
            }
        } else {
            touched = true;
            for hit in hits {
                if run.is_empty() {
                    // Austritt: Randpunkt eroeffnet das naechste Fragment
                    run.push(hit);
                } else {
                    // Eintritt: Randpunkt schliesst das ueberlebende Stueck ab
                    run.push(hit);
                    close_run(&mut runs, &mut run);
                }
            }
            if next_outside {
                run.push(next);
            }
        }
    }
    close_run(&mut runs, &mut run);

    if !touched {
        return vec![stroke.clone()];
    }

    runs.into_iter()
        .filter(|points| points.len() >= 2)
        .enumerate()
        .map(|(index, points)| stroke.fragment(index + 1, points))
        .collect()
}

/// Schliesst den aktuellen Run als Fragment-Kandidaten ab und leert ihn.
fn close_run(runs: &mut Vec<Vec<Vec2>>, run: &mut Vec<Vec2>) {
    if !run.is_empty() {
        runs.push(std::mem::take(run));
    }
}
