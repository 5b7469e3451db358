//! Ein benannter Knoten des Netzwerk-Diagramms.

use super::ModelError;
use glam::DVec2;

/// Einzelner Node mit eindeutigem Namen und Mittelpunkt.
///
/// Das Modell gibt Nodes nur als `&NetworkNode` heraus; Änderungen laufen
/// ausschließlich über `NetworkModel`, damit Listener benachrichtigt werden.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkNode {
    /// Anzeigename, innerhalb eines Modells eindeutig (case-sensitiv)
    pub name: String,
    /// Mittelpunkt der Node-Ellipse in Modell-Koordinaten
    pub position: DVec2,
}

impl NetworkNode {
    /// Erstellt einen neuen Node.
    pub fn new(name: impl Into<String>, position: DVec2) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    /// X-Koordinate des Mittelpunkts
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y-Koordinate des Mittelpunkts
    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Prüft, ob ein Name im Zeilenformat darstellbar ist.
pub fn validate_node_name(name: &str) -> Result<(), ModelError> {
    if name.contains(['"', '\n', '\r']) {
        return Err(ModelError::InvalidName(name.to_string()));
    }
    Ok(())
}
