//! Rein-mathematische Geometrie-Primitive fuer Polylinien und Radier-Kreise.

use glam::Vec2;

/// Minimaler Abstand eines Punkts zu einem Liniensegment.
///
/// Projiziert den Punkt auf die Segmentgerade und klemmt den Parameter
/// auf [0, 1], damit auch Punkte jenseits der Endpunkte korrekt gemessen werden.
pub fn point_segment_distance(point: Vec2, seg_start: Vec2, seg_end: Vec2) -> f32 {
    let seg = seg_end - seg_start;
    let len_sq = seg.length_squared();
    if len_sq == 0.0 {
        // Degeneriertes Segment: beide Endpunkte identisch
        return point.distance(seg_start);
    }

    let t = ((point - seg_start).dot(seg) / len_sq).clamp(0.0, 1.0);
    point.distance(seg_start + seg * t)
}

/// Prueft ob ein Punkt strikt ausserhalb des Kreises liegt.
///
/// Randpunkte (Abstand exakt gleich Radius) zaehlen als innen.
pub fn is_outside_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) > radius * radius
}

/// Schnittpunkte eines Segments mit einem Kreis, aufsteigend nach `t` sortiert.
///
/// Loest `a*t^2 + b*t + c = 0` mit `t` als Segmentparameter von `seg_start`
/// nach `seg_end`. Geliefert werden nur Wurzeln mit `t` in [0, 1]; eine
/// Tangente (Doppelwurzel) liefert genau einen Punkt. Ein Null-Laengen-Segment
/// liefert keine Schnittpunkte.
pub fn segment_circle_intersections(
    seg_start: Vec2,
    seg_end: Vec2,
    center: Vec2,
    radius: f32,
) -> Vec<Vec2> {
    let d = seg_end - seg_start;
    let a = d.length_squared();
    if a == 0.0 {
        return Vec::new();
    }

    let f = seg_start - center;
    let b = 2.0 * d.dot(f);
    let c = f.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrt_disc = discriminant.sqrt();
    let mut hits = Vec::with_capacity(2);

    let t_enter = (-b - sqrt_disc) / (2.0 * a);
    if (0.0..=1.0).contains(&t_enter) {
        hits.push(seg_start + d * t_enter);
    }
    if sqrt_disc > 0.0 {
        let t_exit = (-b + sqrt_disc) / (2.0 * a);
        if (0.0..=1.0).contains(&t_exit) {
            hits.push(seg_start + d * t_exit);
        }
    }

    hits
}

/// Prueft ob ein neuer Pointer-Sample weit genug vom letzten Punkt entfernt ist.
///
/// Rohe Pointer-Samples liegen oft nur Bruchteile einer Einheit auseinander;
/// ohne diesen Filter wachsen Strokes unnoetig und alle segmentbasierten
/// Abfragen zahlen den Preis.
pub fn should_append_point(last: Vec2, candidate: Vec2, min_distance: f32) -> bool {
    last.distance_squared(candidate) >= min_distance * min_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_to_segment_interior() {
        let d = point_segment_distance(Vec2::new(5.0, 5.0), Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_clamps_to_segment_endpoints() {
        let d = point_segment_distance(Vec2::new(-3.0, 4.0), Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_to_zero_length_segment() {
        let p = Vec2::new(2.0, 2.0);
        let d = point_segment_distance(Vec2::new(5.0, 6.0), p, p);
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn boundary_point_counts_as_inside() {
        let center = Vec2::new(0.0, 0.0);
        assert!(!is_outside_circle(Vec2::new(5.0, 0.0), center, 5.0));
        assert!(is_outside_circle(Vec2::new(5.001, 0.0), center, 5.0));
    }

    #[test]
    fn segment_through_circle_yields_two_sorted_hits() {
        let hits = segment_circle_intersections(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 0.0),
            10.0,
        );
        assert_eq!(hits.len(), 2);
        assert_abs_diff_eq!(hits[0].x, 40.0, epsilon = 1e-3);
        assert_abs_diff_eq!(hits[1].x, 60.0, epsilon = 1e-3);
    }

    #[test]
    fn disjoint_segment_yields_no_hits() {
        let hits = segment_circle_intersections(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(50.0, 50.0),
            5.0,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn zero_length_segment_yields_no_hits() {
        let p = Vec2::new(50.0, 0.0);
        let hits = segment_circle_intersections(p, p, Vec2::new(50.0, 0.0), 10.0);
        assert!(hits.is_empty());
    }

    #[test]
    fn tangent_segment_yields_single_hit() {
        // Gerade x=0 beruehrt den Kreis um (5, 0) mit Radius 5 in (0, 0)
        let hits = segment_circle_intersections(
            Vec2::new(0.0, -10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(5.0, 0.0),
            5.0,
        );
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(hits[0].y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn min_spacing_accepts_exact_threshold() {
        let last = Vec2::new(0.0, 0.0);
        assert!(!should_append_point(last, Vec2::new(2.9, 0.0), 3.0));
        assert!(should_append_point(last, Vec2::new(3.0, 0.0), 3.0));
        assert!(should_append_point(last, Vec2::new(4.5, 0.0), 3.0));
    }
}
