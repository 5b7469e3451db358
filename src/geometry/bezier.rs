//! Kubische Bézier-Kurven der Verbindungen.

use super::primitives::{nearest_point_by_refinement, NearestPoint};
use crate::core::Side;
use glam::DVec2;

/// Umrechnung Bézier-Kontrollpunkte → Potenzbasis (`a t³ + b t² + c t + d`).
pub const BEZIER_BASIS: [[f64; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

/// Kubische Bézier-Kurve mit Start, zwei Kontrollpunkten und Ende.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Startpunkt
    pub p1: DVec2,
    /// Kontrollpunkt am Start
    pub c1: DVec2,
    /// Kontrollpunkt am Ende
    pub c2: DVec2,
    /// Endpunkt
    pub p2: DVec2,
}

impl CubicBezier {
    /// Erstellt eine Kurve aus vier Punkten.
    pub fn new(p1: DVec2, c1: DVec2, c2: DVec2, p2: DVec2) -> Self {
        Self { p1, c1, c2, p2 }
    }

    /// Koeffizienten der Potenzbasis: 2×4-Geometriematrix × `BEZIER_BASIS`.
    pub fn coefficients(&self) -> BezierCoefficients {
        let geometry = [
            [self.p1.x, self.c1.x, self.c2.x, self.p2.x],
            [self.p1.y, self.c1.y, self.c2.y, self.p2.y],
        ];
        let mut coef = [[0.0; 4]; 2];
        for (row, geo_row) in coef.iter_mut().zip(geometry.iter()) {
            for (j, value) in row.iter_mut().enumerate() {
                *value = (0..4).map(|k| geo_row[k] * BEZIER_BASIS[k][j]).sum();
            }
        }
        BezierCoefficients {
            x: coef[0],
            y: coef[1],
        }
    }

    /// Kurvenpunkt zum Parameter `t`.
    pub fn point_at(&self, t: f64) -> DVec2 {
        self.coefficients().point_at(t)
    }

    /// Nächster Kurvenpunkt zu `target` (adaptive Suche).
    pub fn nearest_point(&self, target: DVec2) -> NearestPoint {
        self.coefficients().nearest_point(target)
    }
}

/// Koeffizienten `[a, b, c, d]` je Achse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierCoefficients {
    /// X-Zeile
    pub x: [f64; 4],
    /// Y-Zeile
    pub y: [f64; 4],
}

impl BezierCoefficients {
    /// Wertet `a t³ + b t² + c t + d` je Achse aus (Horner-Schema).
    pub fn point_at(&self, t: f64) -> DVec2 {
        let eval = |c: &[f64; 4]| ((c[0] * t + c[1]) * t + c[2]) * t + c[3];
        DVec2::new(eval(&self.x), eval(&self.y))
    }

    /// Nächster Kurvenpunkt zu `target`.
    pub fn nearest_point(&self, target: DVec2) -> NearestPoint {
        nearest_point_by_refinement(|t| self.point_at(t), target)
    }
}

/// Kontrollpunkt: Ankerpunkt entlang der Außennormalen der Seite verschoben.
pub fn control_point(anchor: DVec2, side: Side, offset: f64) -> DVec2 {
    anchor + side.outward_normal() * offset
}

/// Kurve einer Verbindung zwischen zwei Andockpunkten.
///
/// Beide Kontrollpunkte liegen `min(max_offset, |p1 − p2|)` vor ihrer Seite.
pub fn connection_curve(
    p1: DVec2,
    side1: Side,
    p2: DVec2,
    side2: Side,
    max_offset: f64,
) -> CubicBezier {
    let offset = max_offset.min(p1.distance(p2));
    CubicBezier::new(
        p1,
        control_point(p1, side1, offset),
        control_point(p2, side2, offset),
        p2,
    )
}

/// Vorschaukurve vom Startanker zum Zeiger; beide Kontrollpunkte am Start.
pub fn preview_curve(start: DVec2, side: Side, pointer: DVec2, max_offset: f64) -> CubicBezier {
    let control = control_point(start, side, max_offset.min(start.distance(pointer)));
    CubicBezier::new(start, control, control, pointer)
}
