use crate::core::TransformGesture;
use crate::geometry::Anchor;
use glam::DVec2;
use std::fmt;

/// Aktiver Interaktionsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Standard: selektieren, verschieben, umbenennen
    #[default]
    Select,
    /// Klick erstellt einen Node
    CreateNode,
    /// Drag von Andockpunkt zu Andockpunkt erstellt eine Verbindung
    CreateConnection,
    /// Rotation/Skalierung der Ansicht um einen Pivot
    Transform,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EditorMode::Select => "Auswählen",
            EditorMode::CreateNode => "Node erstellen",
            EditorMode::CreateConnection => "Verbindung erstellen",
            EditorMode::Transform => "Ansicht transformieren",
        };
        f.write_str(label)
    }
}

/// Laufender Node-Drag im Select-Modus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDrag {
    /// Index des gezogenen Nodes
    pub index: usize,
    /// Position beim Drag-Start (alter Wert für MoveNode)
    pub start_position: DVec2,
    /// Abstand Zeiger → Node-Mittelpunkt beim Greifen
    pub grab_offset: DVec2,
}

/// Entstehende Verbindung im CreateConnection-Modus
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionDraft {
    /// Startanker (Node + Seite)
    pub start: Anchor,
    /// Aktuelle Zeigerposition in Modell-Koordinaten
    pub pointer: DVec2,
}

/// Zustand des Interaktions-Controllers
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Node-Drag (nur Select-Modus)
    pub node_drag: Option<NodeDrag>,
    /// Verbindungs-Entwurf (nur CreateConnection-Modus)
    pub connection_draft: Option<ConnectionDraft>,
    /// Eingerasteter Andockpunkt unter dem Zeiger
    pub snap_anchor: Option<DVec2>,
    /// Transform-Geste (nur Transform-Modus)
    pub gesture: TransformGesture,
}

impl EditorState {
    /// Erstellt den Zustand im Select-Modus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft alle laufenden Gesten; der Pivot bleibt erhalten.
    pub fn cancel_gestures(&mut self) {
        self.node_drag = None;
        self.connection_draft = None;
        self.snap_anchor = None;
        self.gesture.cancel();
    }

    /// Gibt `true` zurück, solange irgendeine Geste läuft.
    pub fn has_active_gesture(&self) -> bool {
        self.node_drag.is_some() || self.connection_draft.is_some() || self.gesture.is_dragging()
    }
}
