use crate::geometry::GeometryDescriptor;

/// Auswahlbezogener Anwendungszustand
///
/// Höchstens ein Node (mit optionalem Caret) oder eine Verbindung ist selektiert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Aktuelle Auswahl
    pub descriptor: GeometryDescriptor,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index des selektierten Nodes
    pub fn selected_node(&self) -> Option<usize> {
        match self.descriptor {
            GeometryDescriptor::Node { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Caret-Position im selektierten Node
    pub fn caret(&self) -> Option<usize> {
        match self.descriptor {
            GeometryDescriptor::Node { caret, .. } => caret,
            _ => None,
        }
    }

    /// Index der selektierten Verbindung
    pub fn selected_connection(&self) -> Option<usize> {
        match self.descriptor {
            GeometryDescriptor::Connection { index } => Some(index),
            _ => None,
        }
    }

    /// Selektiert einen Node.
    pub fn select_node(&mut self, index: usize, caret: Option<usize>) {
        self.descriptor = GeometryDescriptor::Node { index, caret };
    }

    /// Setzt nur die Caret-Position des selektierten Nodes.
    pub fn set_caret(&mut self, caret: usize) {
        if let GeometryDescriptor::Node { index, .. } = self.descriptor {
            self.descriptor = GeometryDescriptor::Node {
                index,
                caret: Some(caret),
            };
        }
    }

    /// Leert die Auswahl.
    pub fn clear(&mut self) {
        self.descriptor = GeometryDescriptor::Empty;
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.descriptor == GeometryDescriptor::Empty
    }
}
