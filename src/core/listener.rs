//! Beobachter-Schnittstelle für Modelländerungen.

use super::{NetworkConnection, NetworkNode};
use std::cell::Cell;
use std::rc::Rc;

/// Wird synchron vom `NetworkModel` nach jeder Änderung aufgerufen.
///
/// Callbacks erhalten nur geteilte Referenzen und dürfen das Modell nicht
/// mutieren. Die Aufrufreihenfolge entspricht der Registrierungsreihenfolge.
pub trait NetworkListener {
    /// Ein Node wurde hinzugefügt, entfernt, verschoben oder umbenannt.
    fn on_node_changed(&mut self, _node: &NetworkNode) {}

    /// Eine Verbindung wurde hinzugefügt, entfernt oder umgeschrieben.
    fn on_connection_changed(&mut self, _connection: &NetworkConnection) {}

    /// Der Transform-Stack hat sich geändert.
    fn on_transform_changed(&mut self) {}
}

/// Handle einer Listener-Registrierung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

/// Listener, der bei jeder Änderung ein geteiltes Neuzeichnen-Flag setzt.
///
/// Eine View hält den `Rc<Cell<bool>>` und fragt ihn pro Frame ab.
#[derive(Debug, Clone, Default)]
pub struct RepaintListener {
    flag: Rc<Cell<bool>>,
}

impl RepaintListener {
    /// Erstellt einen Listener mit eigenem Flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Listener, der ein vorhandenes Flag setzt.
    pub fn from_flag(flag: Rc<Cell<bool>>) -> Self {
        Self { flag }
    }

    /// Liefert das geteilte Flag, das der Listener setzt.
    pub fn flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.flag)
    }
}

impl NetworkListener for RepaintListener {
    fn on_node_changed(&mut self, _node: &NetworkNode) {
        self.flag.set(true);
    }

    fn on_connection_changed(&mut self, _connection: &NetworkConnection) {
        self.flag.set(true);
    }

    fn on_transform_changed(&mut self) {
        self.flag.set(true);
    }
}
