//! Umkehrbare Edit-Kommandos auf dem Netzwerk-Modell.
//!
//! Jedes Kommando hält die Werte, die es zum Ausführen und exakten
//! Zurücknehmen braucht. Alte Werte werden beim Erstellen erfasst.

use crate::core::{ModelError, NetworkConnection, NetworkModel, NetworkNode};
use glam::{DAffine2, DVec2};

/// Ein einzelner, umkehrbarer Edit-Schritt
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Node an `index` einfügen
    NewNode { index: usize, node: NetworkNode },
    /// Node entfernen samt der Verbindungen, die ihn referenzieren
    RemoveNode {
        index: usize,
        node: NetworkNode,
        connections: Vec<(usize, NetworkConnection)>,
    },
    /// Verbindung an `index` einfügen
    NewConnection {
        index: usize,
        connection: NetworkConnection,
    },
    /// Verbindung an `index` entfernen
    RemoveConnection {
        index: usize,
        connection: NetworkConnection,
    },
    /// Node umbenennen (Verbindungen werden mit umgeschrieben)
    RenameNode {
        index: usize,
        old_name: String,
        new_name: String,
        /// Verbindungen, die `old_name` referenzieren, im Zustand vor dem Umbenennen
        connections: Vec<(usize, NetworkConnection)>,
    },
    /// Node verschieben
    MoveNode {
        index: usize,
        old_position: DVec2,
        new_position: DVec2,
    },
    /// Transformation auf den Stack legen
    NewTransformation { index: usize, transform: DAffine2 },
    /// Transform-Stack leeren
    ClearTransformations { previous: Vec<DAffine2> },
}

impl EditCommand {
    /// Neuer Node oben in der Zeichenreihenfolge.
    pub fn new_node(model: &NetworkModel, node: NetworkNode) -> Self {
        Self::NewNode {
            index: model.node_count(),
            node,
        }
    }

    /// Entfernen des Nodes am Index; die abhängigen Verbindungen werden jetzt erfasst.
    pub fn remove_node(model: &NetworkModel, index: usize) -> Result<Self, ModelError> {
        let node = model
            .node(index)
            .cloned()
            .ok_or(ModelError::NodeIndexOutOfRange {
                index,
                len: model.node_count(),
            })?;
        let connections = model
            .connections()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.references(&node.name))
            .map(|(i, c)| (i, c.clone()))
            .collect();
        Ok(Self::RemoveNode {
            index,
            node,
            connections,
        })
    }

    /// Neue Verbindung am Ende der Liste.
    pub fn new_connection(model: &NetworkModel, connection: NetworkConnection) -> Self {
        Self::NewConnection {
            index: model.connection_count(),
            connection,
        }
    }

    /// Entfernen der Verbindung am Index.
    pub fn remove_connection(model: &NetworkModel, index: usize) -> Result<Self, ModelError> {
        let connection =
            model
                .connection(index)
                .cloned()
                .ok_or(ModelError::ConnectionIndexOutOfRange {
                    index,
                    len: model.connection_count(),
                })?;
        Ok(Self::RemoveConnection { index, connection })
    }

    /// Umbenennen; der aktuelle Name und die betroffenen Verbindungen werden erfasst.
    pub fn rename_node(
        model: &NetworkModel,
        index: usize,
        new_name: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let old_name = model
            .node(index)
            .map(|n| n.name.clone())
            .ok_or(ModelError::NodeIndexOutOfRange {
                index,
                len: model.node_count(),
            })?;
        let connections = model
            .connections()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.references(&old_name))
            .map(|(i, c)| (i, c.clone()))
            .collect();
        Ok(Self::RenameNode {
            index,
            old_name,
            new_name: new_name.into(),
            connections,
        })
    }

    /// Verschieben mit explizit übergebener Ausgangsposition.
    ///
    /// Beim Drag ist der Node bereits live verschoben; die Ausgangsposition
    /// stammt dann aus dem Drag-Start, nicht aus dem Modell.
    pub fn move_node(index: usize, old_position: DVec2, new_position: DVec2) -> Self {
        Self::MoveNode {
            index,
            old_position,
            new_position,
        }
    }

    /// Bestätigte Gesten-Transformation.
    pub fn new_transformation(model: &NetworkModel, transform: DAffine2) -> Self {
        Self::NewTransformation {
            index: model.transformations().len(),
            transform,
        }
    }

    /// Leeren des Transform-Stacks; der aktuelle Stack wird erfasst.
    pub fn clear_transformations(model: &NetworkModel) -> Self {
        Self::ClearTransformations {
            previous: model.transformations().to_vec(),
        }
    }

    /// Führt die Mutation aus.
    pub fn execute(&self, model: &mut NetworkModel) -> Result<(), ModelError> {
        match self {
            Self::NewNode { index, node } => model.insert_node(*index, node.clone()),
            Self::RemoveNode { index, .. } => model.remove_node(*index).map(|_| ()),
            Self::NewConnection { index, connection } => {
                model.insert_connection(*index, connection.clone())
            }
            Self::RemoveConnection { index, .. } => model.remove_connection(*index).map(|_| ()),
            Self::RenameNode {
                index, new_name, ..
            } => model.rename_node(*index, new_name),
            Self::MoveNode {
                index,
                new_position,
                ..
            } => model.move_node(*index, *new_position),
            Self::NewTransformation { transform, .. } => {
                model.add_transformation(*transform);
                Ok(())
            }
            Self::ClearTransformations { .. } => {
                model.clear_transformations();
                Ok(())
            }
        }
    }

    /// Nimmt die Mutation exakt zurück.
    pub fn revert(&self, model: &mut NetworkModel) -> Result<(), ModelError> {
        match self {
            Self::NewNode { index, .. } => {
                // offene Referenzen auf den Namen existierten schon vorher
                let removed = model.remove_node(*index)?;
                for (i, connection) in removed.connections {
                    model.insert_connection(i, connection)?;
                }
                Ok(())
            }
            Self::RemoveNode {
                index,
                node,
                connections,
            } => {
                model.insert_node(*index, node.clone())?;
                // aufsteigende Indizes: jede Verbindung landet an ihrer alten Stelle
                for (i, connection) in connections {
                    model.insert_connection(*i, connection.clone())?;
                }
                Ok(())
            }
            Self::NewConnection { index, .. } => model.remove_connection(*index).map(|_| ()),
            Self::RemoveConnection { index, connection } => {
                model.insert_connection(*index, connection.clone())
            }
            Self::RenameNode {
                index,
                old_name,
                connections,
                ..
            } => model.restore_node_name(*index, old_name, connections),
            Self::MoveNode {
                index,
                old_position,
                ..
            } => model.move_node(*index, *old_position),
            Self::NewTransformation { index, .. } => {
                model.remove_transformation(*index).map(|_| ())
            }
            Self::ClearTransformations { previous } => {
                model.restore_transformations(previous.clone());
                Ok(())
            }
        }
    }

    /// Kurzbeschreibung für Log-Ausgaben.
    pub fn description(&self) -> String {
        match self {
            Self::NewNode { node, .. } => format!("Node '{}' erstellen", node.name),
            Self::RemoveNode {
                node, connections, ..
            } => format!(
                "Node '{}' mit {} Verbindung(en) löschen",
                node.name,
                connections.len()
            ),
            Self::NewConnection { connection, .. } => format!(
                "Verbindung {}:{} → {}:{} erstellen",
                connection.node1, connection.side1, connection.node2, connection.side2
            ),
            Self::RemoveConnection { connection, .. } => format!(
                "Verbindung {} → {} löschen",
                connection.node1, connection.node2
            ),
            Self::RenameNode {
                old_name, new_name, ..
            } => format!("Node '{}' in '{}' umbenennen", old_name, new_name),
            Self::MoveNode { index, .. } => format!("Node #{} verschieben", index),
            Self::NewTransformation { .. } => "Ansicht transformieren".to_string(),
            Self::ClearTransformations { previous } => {
                format!("{} Transformation(en) zurücksetzen", previous.len())
            }
        }
    }
}
