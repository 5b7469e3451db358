//! Reine Geometrie-Funktionen: Bounding-Box, Ellipse, Linie, Nächster-Punkt-Suche.
//!
//! Layer-neutral und zustandslos, damit Hit-Test und Benchmarks sie direkt nutzen.

use glam::DVec2;

/// Stichproben pro Verfeinerungsstufe der Nächster-Punkt-Suche.
pub const SEARCH_SAMPLES: usize = 10;
/// Harte Obergrenze der Verfeinerungsstufen.
pub const MAX_REFINEMENT_LEVELS: usize = 20;
/// Die Suche endet, sobald die Sehne des Intervalls quadriert höchstens so lang ist.
const CHORD_TOLERANCE_SQ: f64 = 1.0;
/// Aufweitung einer entarteten (null-breiten oder null-hohen) Box.
const DEGENERATE_BOX_MARGIN: f64 = 5.0;

/// Prüft, ob `point` in der von `a` und `b` aufgespannten Box liegt.
///
/// Ist die Box in einer Achse entartet, wird sie in dieser Achse um ±5 aufgeweitet,
/// damit waagerechte und senkrechte Linien überhaupt getroffen werden können.
pub fn in_bounding_box(a: DVec2, b: DVec2, point: DVec2) -> bool {
    let mut min = a.min(b);
    let mut max = a.max(b);
    if min.x == max.x {
        min.x -= DEGENERATE_BOX_MARGIN;
        max.x += DEGENERATE_BOX_MARGIN;
    }
    if min.y == max.y {
        min.y -= DEGENERATE_BOX_MARGIN;
        max.y += DEGENERATE_BOX_MARGIN;
    }
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Exakter Ellipsen-Test `(dx/a)² + (dy/b)² ≤ 1` mit Halbachsen `half_size`.
pub fn inside_ellipse(center: DVec2, half_size: DVec2, point: DVec2) -> bool {
    if half_size.x <= 0.0 || half_size.y <= 0.0 {
        return false;
    }
    let d = (point - center) / half_size;
    d.x * d.x + d.y * d.y <= 1.0
}

/// Punkt auf der Strecke `a → b` zum Parameter `t`.
pub fn line_point(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    a + (b - a) * t
}

/// Ergebnis einer Nächster-Punkt-Suche
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// Kurvenparameter in `[0, 1]`
    pub t: f64,
    /// Kurvenpunkt zum Parameter
    pub point: DVec2,
    /// Quadrierter Abstand zum Suchpunkt
    pub distance_sq: f64,
}

/// Adaptive Suche des Kurvenpunkts, der `target` am nächsten liegt.
///
/// Pro Stufe werden `SEARCH_SAMPLES` Stichproben im aktuellen Intervall
/// ausgewertet; das Intervall schrumpft auf eine Schrittweite beidseits der
/// besten Stichprobe. Sobald die Sehne zwischen den Intervallgrenzen ≤ 1 ist,
/// wird der Punkt an der unteren Grenze geliefert.
pub fn nearest_point_by_refinement<F>(curve: F, target: DVec2) -> NearestPoint
where
    F: Fn(f64) -> DVec2,
{
    let mut lower = 0.0_f64;
    let mut upper = 1.0_f64;
    let mut best = sample(&curve, 0.0, target);

    for _ in 0..MAX_REFINEMENT_LEVELS {
        let increment = (upper - lower) / SEARCH_SAMPLES as f64;
        best = (0..=SEARCH_SAMPLES)
            .map(|i| sample(&curve, lower + i as f64 * increment, target))
            .reduce(|acc, s| if s.distance_sq < acc.distance_sq { s } else { acc })
            .unwrap_or(best);

        lower = (best.t - increment).max(0.0);
        upper = (best.t + increment).min(1.0);

        let low_point = curve(lower);
        if low_point.distance_squared(curve(upper)) <= CHORD_TOLERANCE_SQ {
            return NearestPoint {
                t: lower,
                point: low_point,
                distance_sq: low_point.distance_squared(target),
            };
        }
    }

    best
}

fn sample<F: Fn(f64) -> DVec2>(curve: &F, t: f64, target: DVec2) -> NearestPoint {
    let point = curve(t);
    NearestPoint {
        t,
        point,
        distance_sq: point.distance_squared(target),
    }
}

/// Nächster Punkt auf der Strecke `a → b`, über dieselbe adaptive Suche wie bei Kurven.
pub fn nearest_point_on_segment(a: DVec2, b: DVec2, target: DVec2) -> NearestPoint {
    nearest_point_by_refinement(|t| line_point(a, b, t), target)
}

/// Geschlossene Lösung per Projektion (Referenz für die adaptive Suche).
pub fn project_onto_segment(a: DVec2, b: DVec2, target: DVec2) -> NearestPoint {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((target - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    };
    let point = line_point(a, b, t);
    NearestPoint {
        t,
        point,
        distance_sq: point.distance_squared(target),
    }
}
