//! Repräsentiert eine Verbindung zwischen zwei benannten Nodes.

use glam::DVec2;
use std::fmt;

/// Seite eines Nodes, an der eine Verbindung andockt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Oberkante
    Top,
    /// Unterkante
    Bottom,
    /// Linke Kante
    Left,
    /// Rechte Kante
    Right,
}

impl Side {
    /// Alle Seiten in der Reihenfolge, in der Andockpunkte gesammelt werden.
    pub const ALL: [Side; 4] = [Side::Bottom, Side::Left, Side::Right, Side::Top];

    /// Einheitsvektor, der vom Node weg zeigt (Screen-Y wächst nach unten).
    pub fn outward_normal(self) -> DVec2 {
        match self {
            Side::Top => DVec2::new(0.0, -1.0),
            Side::Bottom => DVec2::new(0.0, 1.0),
            Side::Left => DVec2::new(-1.0, 0.0),
            Side::Right => DVec2::new(1.0, 0.0),
        }
    }

    /// Ein-Zeichen-Kürzel für das Dateiformat.
    pub fn code(self) -> &'static str {
        match self {
            Side::Top => "T",
            Side::Bottom => "B",
            Side::Left => "L",
            Side::Right => "R",
        }
    }

    /// Parst Kürzel (`T`) oder Langform (`Top`), ohne Beachtung der Groß-/Kleinschreibung.
    pub fn from_code(text: &str) -> Option<Side> {
        match text.to_ascii_lowercase().as_str() {
            "t" | "top" => Some(Side::Top),
            "b" | "bottom" => Some(Side::Bottom),
            "l" | "left" => Some(Side::Left),
            "r" | "right" => Some(Side::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Eine Verbindung referenziert ihre Endpunkte über den Node-Namen.
///
/// Existiert einer der Namen nicht (mehr), ist die Verbindung "dangling":
/// sie wird weder gezeichnet noch per Hit-Test gefunden, bleibt aber erhalten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConnection {
    /// Name des ersten Nodes
    pub node1: String,
    /// Andock-Seite am ersten Node
    pub side1: Side,
    /// Name des zweiten Nodes
    pub node2: String,
    /// Andock-Seite am zweiten Node
    pub side2: Side,
}

impl NetworkConnection {
    /// Erstellt eine neue Verbindung
    pub fn new(
        node1: impl Into<String>,
        side1: Side,
        node2: impl Into<String>,
        side2: Side,
    ) -> Self {
        Self {
            node1: node1.into(),
            side1,
            node2: node2.into(),
            side2,
        }
    }

    /// Prüft, ob einer der beiden Endpunkte den Namen referenziert.
    pub fn references(&self, name: &str) -> bool {
        self.node1 == name || self.node2 == name
    }

    /// Schreibt Endpunkte von `old` auf `new` um. Gibt zurück, ob sich etwas geändert hat.
    pub(crate) fn rename_endpoint(&mut self, old: &str, new: &str) -> bool {
        let mut changed = false;
        if self.node1 == old {
            self.node1 = new.to_string();
            changed = true;
        }
        if self.node2 == old {
            self.node2 = new.to_string();
            changed = true;
        }
        changed
    }
}
