//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Der Core setzt keine Zeichenbefehle ab; der Host zeichnet ausschließlich
//! aus dieser Beschreibung. Alle Geometrie liegt in Modell-Koordinaten und
//! wird über `transform` auf den Screen abgebildet.

use crate::geometry::{CubicBezier, LabelBox};
use glam::{DAffine2, DVec2};

/// Darstellung eines Nodes
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    /// Beschriftung
    pub name: String,
    /// Ellipsen-Mittelpunkt
    pub center: DVec2,
    /// Ellipsen-Breite und -Höhe
    pub size: DVec2,
    /// Rechteck der Beschriftung
    pub label: LabelBox,
    /// Node ist selektiert
    pub highlighted: bool,
    /// Caret-Position im Label (nur beim selektierten Node)
    pub caret: Option<usize>,
}

/// Darstellung einer auflösbaren Verbindung
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionShape {
    /// Index in der Verbindungsliste des Modells
    pub index: usize,
    /// Bézier-Kurve inkl. Kontrollpunkte
    pub curve: CubicBezier,
    /// Verbindung ist selektiert
    pub highlighted: bool,
}

/// Quadrat, das einen einrastenden Andockpunkt anzeigt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPrompt {
    /// Obere linke Ecke (Anker − halbe Kantenlänge)
    pub upper_left: DVec2,
    /// Kantenlänge
    pub size: f64,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Nodes in Zeichenreihenfolge
    pub nodes: Vec<NodeShape>,
    /// Verbindungen mit auflösbaren Endpunkten
    pub connections: Vec<ConnectionShape>,
    /// Effektive View-Transformation inkl. Vorschau
    pub transform: DAffine2,
    /// Vorschaukurve einer entstehenden Verbindung
    pub preview_curve: Option<CubicBezier>,
    /// Snap-Anzeige
    pub snap_prompt: Option<SnapPrompt>,
    /// Pivot der Transform-Geste (Screen-Koordinaten), nur im Transform-Modus
    pub pivot_marker: Option<DVec2>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f64; 2],
    /// Ungespeicherte Änderungen (z.B. für den Fenstertitel)
    pub has_unsaved_changes: bool,
}

impl RenderScene {
    /// Gibt zurück, ob das Diagramm leer ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
