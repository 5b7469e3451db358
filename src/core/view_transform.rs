//! View-Transformation aus Rotations-/Skalierungs-Gesten um einen Pivot.
//!
//! Gesten arbeiten in Screen-Koordinaten (Y wächst nach unten). Das Ergebnis
//! wird links an die bestätigten Transformationen des Modells multipliziert.

use super::TransformError;
use glam::{DAffine2, DMat2, DVec2};

/// Determinanten unterhalb dieser Schranke gelten als singulär.
const MIN_DETERMINANT: f64 = 1e-12;

/// Phase einer laufenden Transform-Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Kein Pivot gesetzt, keine Geste aktiv
    #[default]
    Idle,
    /// Pivot explizit gesetzt, noch kein Drag
    PivotSet,
    /// Drag läuft, Vorschau-Transformation aktiv
    Dragging,
    /// Geste beendet, Transformation übergeben
    Committed,
}

/// Zustandsmaschine einer Rotations-/Skalierungs-Geste.
#[derive(Debug, Clone, Default)]
pub struct TransformGesture {
    phase: GesturePhase,
    pivot: Option<DVec2>,
    /// Pivot des laufenden Drags (explizit oder Viewport-Mitte beim Start)
    drag_pivot: Option<DVec2>,
    start: Option<DVec2>,
    provisional: Option<DAffine2>,
}

impl TransformGesture {
    /// Erstellt eine Geste im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Explizit gesetzter Pivot
    pub fn pivot(&self) -> Option<DVec2> {
        self.pivot
    }

    /// Pivot des laufenden Drags, sonst der gesetzte Pivot, sonst `view_center`
    pub fn pivot_or(&self, view_center: DVec2) -> DVec2 {
        self.drag_pivot.or(self.pivot).unwrap_or(view_center)
    }

    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Vorschau-Transformation der laufenden Geste
    pub fn provisional(&self) -> Option<DAffine2> {
        self.provisional
    }

    /// Setzt den Pivot (Einfachklick im Transform-Modus).
    pub fn set_pivot(&mut self, pivot: DVec2) {
        self.pivot = Some(pivot);
        self.drag_pivot = None;
        self.start = None;
        self.provisional = None;
        self.phase = GesturePhase::PivotSet;
    }

    /// Verwirft den Pivot, damit wieder die Viewport-Mitte gilt.
    pub fn reset_pivot(&mut self) {
        self.pivot = None;
        self.drag_pivot = None;
        self.start = None;
        self.provisional = None;
        self.phase = GesturePhase::Idle;
    }

    /// Startet den Drag am Punkt `start`.
    ///
    /// Ohne gesetzten Pivot dreht der Drag um die aktuelle Viewport-Mitte;
    /// diese wird nicht als Pivot übernommen.
    pub fn begin(&mut self, start: DVec2, view_center: DVec2) {
        self.drag_pivot = Some(self.pivot.unwrap_or(view_center));
        self.start = Some(start);
        self.provisional = Some(DAffine2::IDENTITY);
        self.phase = GesturePhase::Dragging;
    }

    /// Berechnet die Vorschau für den aktuellen Drag-Punkt.
    pub fn update(&mut self, end: DVec2) -> Option<DAffine2> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        let (pivot, start) = (self.drag_pivot?, self.start?);
        let transform = gesture_transform(pivot, start, end);
        self.provisional = Some(transform);
        Some(transform)
    }

    /// Beendet den Drag und gibt die zu bestätigende Transformation zurück.
    ///
    /// Eine Identitäts-Transformation wird nicht zurückgegeben.
    pub fn finish(&mut self) -> Option<DAffine2> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        self.phase = GesturePhase::Committed;
        self.drag_pivot = None;
        self.start = None;
        self.provisional
            .take()
            .filter(|t| *t != DAffine2::IDENTITY)
    }

    /// Bricht einen laufenden Drag ab, der Pivot bleibt erhalten.
    pub fn cancel(&mut self) {
        self.drag_pivot = None;
        self.start = None;
        self.provisional = None;
        self.phase = if self.pivot.is_some() {
            GesturePhase::PivotSet
        } else {
            GesturePhase::Idle
        };
    }
}

/// Rotation/Skalierung um `pivot`, die `start` auf `end` abbildet.
///
/// `translate(pivot) · R(−α_start) · R(α_end) · scale · translate(−pivot)`.
/// Degenerierte Eingaben (`start == end`, `start == pivot`, `end == pivot`)
/// liefern die Identität.
pub fn gesture_transform(pivot: DVec2, start: DVec2, end: DVec2) -> DAffine2 {
    if start == end || start == pivot || end == pivot {
        return DAffine2::IDENTITY;
    }

    let from = start - pivot;
    let to = end - pivot;
    let from_len = from.x.hypot(from.y);
    let to_len = to.x.hypot(to.y);

    let (sin_start, cos_start) = (from.y / from_len, from.x / from_len);
    let (sin_end, cos_end) = (to.y / to_len, to.x / to_len);

    let undo_start = DMat2::from_cols(
        DVec2::new(cos_start, -sin_start),
        DVec2::new(sin_start, cos_start),
    );
    let apply_end = DMat2::from_cols(DVec2::new(cos_end, sin_end), DVec2::new(-sin_end, cos_end));
    let scale = DMat2::from_diagonal(DVec2::splat(to_len / from_len));

    DAffine2::from_translation(pivot)
        * DAffine2::from_mat2(undo_start * apply_end * scale)
        * DAffine2::from_translation(-pivot)
}

/// Invertiert eine View-Transformation oder meldet sie als singulär.
pub fn invert(transform: DAffine2) -> Result<DAffine2, TransformError> {
    let determinant = transform.matrix2.determinant();
    if !determinant.is_finite() || determinant.abs() < MIN_DETERMINANT {
        return Err(TransformError::NonInvertible { determinant });
    }
    let inverse = transform.inverse();
    if !inverse.is_finite() {
        return Err(TransformError::NonInvertible { determinant });
    }
    Ok(inverse)
}

/// Bildet einen Screen-Punkt über die Inverse in Modell-Koordinaten ab.
pub fn screen_to_model(transform: DAffine2, screen: DVec2) -> Result<DVec2, TransformError> {
    Ok(invert(transform)?.transform_point2(screen))
}
