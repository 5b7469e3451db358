//! Das zentrale Netzwerk-Modell mit Nodes, Connections, Transform-Stack und Listenern.

use super::node::validate_node_name;
use super::{ListenerId, ModelError, NetworkConnection, NetworkListener, NetworkNode};
use glam::{DAffine2, DVec2};
use indexmap::IndexMap;
use std::fmt;

/// Ein entfernter Node samt der Verbindungen, die mit ihm entfernt wurden.
///
/// Die Verbindungen tragen ihren ursprünglichen Index (aufsteigend), damit
/// sie beim Wiederherstellen exakt an dieselbe Stelle zurückkehren.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedNode {
    /// Index, den der Node vor dem Entfernen hatte
    pub index: usize,
    /// Der entfernte Node
    pub node: NetworkNode,
    /// Mitentfernte Verbindungen mit ihrem ursprünglichen Index
    pub connections: Vec<(usize, NetworkConnection)>,
}

/// Vollständiges Diagramm: geordnete Nodes (= Zeichenreihenfolge),
/// geordnete Connections, bestätigte View-Transformationen und Beobachter.
pub struct NetworkModel {
    nodes: Vec<NetworkNode>,
    connections: Vec<NetworkConnection>,
    transformations: Vec<DAffine2>,
    listeners: IndexMap<ListenerId, Box<dyn NetworkListener>>,
    next_listener_id: u64,
    unsaved_changes: bool,
}

impl NetworkModel {
    /// Erstellt ein leeres Modell ohne ungespeicherte Änderungen.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            transformations: Vec::new(),
            listeners: IndexMap::new(),
            next_listener_id: 1,
            unsaved_changes: false,
        }
    }

    /// Baut ein Modell aus geladenen Daten auf (ohne Notifications, ohne Dirty-Flag).
    pub fn from_parts(
        nodes: Vec<NetworkNode>,
        connections: Vec<NetworkConnection>,
    ) -> Result<Self, ModelError> {
        let mut model = Self::new();
        for node in nodes {
            validate_node_name(&node.name)?;
            if model.node_index(&node.name).is_some() {
                return Err(ModelError::DuplicateName(node.name));
            }
            model.nodes.push(node);
        }
        model.connections = connections;
        Ok(model)
    }

    // ── Lesender Zugriff ────────────────────────────────────────────

    /// Alle Nodes in Zeichenreihenfolge
    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    /// Alle Verbindungen in Modellreihenfolge
    pub fn connections(&self) -> &[NetworkConnection] {
        &self.connections
    }

    /// Bestätigte Transformationen, älteste zuerst
    pub fn transformations(&self) -> &[DAffine2] {
        &self.transformations
    }

    /// Node am Index
    pub fn node(&self, index: usize) -> Option<&NetworkNode> {
        self.nodes.get(index)
    }

    /// Verbindung am Index
    pub fn connection(&self, index: usize) -> Option<&NetworkConnection> {
        self.connections.get(index)
    }

    /// Sucht einen Node über seinen exakten Namen.
    pub fn node_by_name(&self, name: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Index des Nodes mit dem exakten Namen.
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }

    /// Anzahl der Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Verbindungen
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Gibt `true` zurück, solange seit dem letzten Speichern mutiert wurde.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Markiert den aktuellen Stand als gespeichert.
    pub fn mark_saved(&mut self) {
        self.unsaved_changes = false;
    }

    /// Liefert `base`, oder `base 2`, `base 3`, … falls der Name vergeben ist.
    pub fn unique_node_name(&self, base: &str) -> String {
        if self.node_index(base).is_none() {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{base} {n}"))
            .find(|candidate| self.node_index(candidate).is_none())
            .unwrap_or_else(|| base.to_string())
    }

    // ── Nodes ───────────────────────────────────────────────────────

    /// Hängt einen Node an (oberste Zeichenebene) und gibt seinen Index zurück.
    pub fn add_node(&mut self, node: NetworkNode) -> Result<usize, ModelError> {
        let index = self.nodes.len();
        self.insert_node(index, node)?;
        Ok(index)
    }

    /// Fügt einen Node an einer bestimmten Position der Zeichenreihenfolge ein.
    pub fn insert_node(&mut self, index: usize, node: NetworkNode) -> Result<(), ModelError> {
        if index > self.nodes.len() {
            return Err(ModelError::NodeIndexOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }
        validate_node_name(&node.name)?;
        if self.node_index(&node.name).is_some() {
            return Err(ModelError::DuplicateName(node.name));
        }
        self.nodes.insert(index, node);
        self.unsaved_changes = true;
        self.notify_node(&self.nodes[index].clone());
        Ok(())
    }

    /// Entfernt einen Node und alle Verbindungen, die seinen Namen referenzieren.
    pub fn remove_node(&mut self, index: usize) -> Result<RemovedNode, ModelError> {
        self.check_node_index(index)?;
        let node = self.nodes.remove(index);

        let mut removed_connections = Vec::new();
        let mut kept = Vec::with_capacity(self.connections.len());
        for (i, connection) in std::mem::take(&mut self.connections).into_iter().enumerate() {
            if connection.references(&node.name) {
                removed_connections.push((i, connection));
            } else {
                kept.push(connection);
            }
        }
        self.connections = kept;
        self.unsaved_changes = true;

        for (_, connection) in &removed_connections {
            self.notify_connection(connection);
        }
        self.notify_node(&node);

        Ok(RemovedNode {
            index,
            node,
            connections: removed_connections,
        })
    }

    /// Benennt einen Node um und schreibt vorher alle referenzierenden Verbindungen um.
    ///
    /// Kollisionen mit einem anderen Node werden abgelehnt.
    pub fn rename_node(&mut self, index: usize, new_name: &str) -> Result<(), ModelError> {
        self.check_node_index(index)?;
        if self.nodes[index].name == new_name {
            return Ok(());
        }
        validate_node_name(new_name)?;
        if self.node_index(new_name).is_some() {
            return Err(ModelError::DuplicateName(new_name.to_string()));
        }

        let old_name = self.nodes[index].name.clone();
        let mut rewritten = Vec::new();
        for (i, connection) in self.connections.iter_mut().enumerate() {
            if connection.rename_endpoint(&old_name, new_name) {
                rewritten.push(i);
            }
        }
        self.nodes[index].name = new_name.to_string();
        self.unsaved_changes = true;

        for i in rewritten {
            let connection = self.connections[i].clone();
            self.notify_connection(&connection);
        }
        self.notify_node(&self.nodes[index].clone());
        Ok(())
    }

    /// Setzt den Namen eines Nodes zurück und ersetzt genau die übergebenen Verbindungen.
    ///
    /// Gegenstück zu [`rename_node`](Self::rename_node): andere Verbindungen,
    /// auch solche mit dem aktuellen Namen als Endpunkt, bleiben unverändert.
    pub fn restore_node_name(
        &mut self,
        index: usize,
        name: &str,
        connections: &[(usize, NetworkConnection)],
    ) -> Result<(), ModelError> {
        self.check_node_index(index)?;
        validate_node_name(name)?;
        if self.node_index(name).is_some_and(|i| i != index) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }
        if let Some(&(i, _)) = connections.iter().find(|(i, _)| *i >= self.connections.len()) {
            return Err(ModelError::ConnectionIndexOutOfRange {
                index: i,
                len: self.connections.len(),
            });
        }

        for (i, connection) in connections {
            self.connections[*i] = connection.clone();
        }
        self.nodes[index].name = name.to_string();
        self.unsaved_changes = true;

        for (_, connection) in connections {
            self.notify_connection(connection);
        }
        self.notify_node(&self.nodes[index].clone());
        Ok(())
    }

    /// Verschiebt einen Node. Gleiche Position ist ein No-op ohne Notification.
    pub fn move_node(&mut self, index: usize, position: DVec2) -> Result<(), ModelError> {
        self.check_node_index(index)?;
        if self.nodes[index].position == position {
            return Ok(());
        }
        self.nodes[index].position = position;
        self.unsaved_changes = true;
        self.notify_node(&self.nodes[index].clone());
        Ok(())
    }

    // ── Connections ─────────────────────────────────────────────────

    /// Hängt eine Verbindung an und gibt ihren Index zurück.
    ///
    /// Die Endpunkte werden nicht geprüft: Verbindungen zu unbekannten
    /// Namen sind erlaubt und bleiben unsichtbar.
    pub fn add_connection(&mut self, connection: NetworkConnection) -> usize {
        let index = self.connections.len();
        self.connections.push(connection);
        self.unsaved_changes = true;
        self.notify_connection(&self.connections[index].clone());
        index
    }

    /// Fügt eine Verbindung an einer bestimmten Position ein.
    pub fn insert_connection(
        &mut self,
        index: usize,
        connection: NetworkConnection,
    ) -> Result<(), ModelError> {
        if index > self.connections.len() {
            return Err(ModelError::ConnectionIndexOutOfRange {
                index,
                len: self.connections.len(),
            });
        }
        self.connections.insert(index, connection);
        self.unsaved_changes = true;
        self.notify_connection(&self.connections[index].clone());
        Ok(())
    }

    /// Entfernt die Verbindung am Index.
    pub fn remove_connection(&mut self, index: usize) -> Result<NetworkConnection, ModelError> {
        if index >= self.connections.len() {
            return Err(ModelError::ConnectionIndexOutOfRange {
                index,
                len: self.connections.len(),
            });
        }
        let connection = self.connections.remove(index);
        self.unsaved_changes = true;
        self.notify_connection(&connection);
        Ok(connection)
    }

    // ── Transformationen ────────────────────────────────────────────

    /// Legt eine bestätigte Transformation oben auf den Stack.
    pub fn add_transformation(&mut self, transform: DAffine2) {
        self.transformations.push(transform);
        self.unsaved_changes = true;
        self.notify_transform();
    }

    /// Entfernt die Transformation am Index.
    pub fn remove_transformation(&mut self, index: usize) -> Result<DAffine2, ModelError> {
        if index >= self.transformations.len() {
            return Err(ModelError::TransformIndexOutOfRange {
                index,
                len: self.transformations.len(),
            });
        }
        let transform = self.transformations.remove(index);
        self.unsaved_changes = true;
        self.notify_transform();
        Ok(transform)
    }

    /// Leert den Transform-Stack und gibt den vorherigen Inhalt zurück.
    pub fn clear_transformations(&mut self) -> Vec<DAffine2> {
        if self.transformations.is_empty() {
            return Vec::new();
        }
        let previous = std::mem::take(&mut self.transformations);
        self.unsaved_changes = true;
        self.notify_transform();
        previous
    }

    /// Stellt einen zuvor geleerten Stack unverändert wieder her.
    pub fn restore_transformations(&mut self, transformations: Vec<DAffine2>) {
        self.transformations.extend(transformations);
        self.unsaved_changes = true;
        self.notify_transform();
    }

    /// Komposition aller bestätigten Transformationen: `T_n · … · T_1`.
    pub fn composed_transform(&self) -> DAffine2 {
        self.transformations
            .iter()
            .fold(DAffine2::IDENTITY, |acc, t| *t * acc)
    }

    /// Effektive View-Transformation inklusive optionaler Vorschau-Transformation.
    pub fn effective_transform(&self, provisional: Option<DAffine2>) -> DAffine2 {
        let composed = self.composed_transform();
        match provisional {
            Some(p) => p * composed,
            None => composed,
        }
    }

    // ── Listener ────────────────────────────────────────────────────

    /// Registriert einen Listener; Notifications erfolgen in Registrierungsreihenfolge.
    pub fn add_listener(&mut self, listener: Box<dyn NetworkListener>) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Entfernt einen Listener und gibt ihn zurück.
    pub fn remove_listener(&mut self, id: ListenerId) -> Option<Box<dyn NetworkListener>> {
        self.listeners.shift_remove(&id)
    }

    /// Anzahl registrierter Listener
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_node(&mut self, node: &NetworkNode) {
        for listener in self.listeners.values_mut() {
            listener.on_node_changed(node);
        }
    }

    fn notify_connection(&mut self, connection: &NetworkConnection) {
        for listener in self.listeners.values_mut() {
            listener.on_connection_changed(connection);
        }
    }

    fn notify_transform(&mut self) {
        for listener in self.listeners.values_mut() {
            listener.on_transform_changed();
        }
    }

    fn check_node_index(&self, index: usize) -> Result<(), ModelError> {
        if index >= self.nodes.len() {
            return Err(ModelError::NodeIndexOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }
        Ok(())
    }
}

impl Default for NetworkModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NetworkModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkModel")
            .field("nodes", &self.nodes)
            .field("connections", &self.connections)
            .field("transformations", &self.transformations)
            .field("listeners", &self.listeners.len())
            .field("unsaved_changes", &self.unsaved_changes)
            .finish()
    }
}
