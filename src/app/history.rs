use super::EditCommand;
use crate::core::{ModelError, NetworkModel};

/// Linearer Undo/Redo-Manager über umkehrbare Kommandos.
///
/// `history` und `future` halten das jüngste Kommando jeweils am Ende.
#[derive(Debug, Default)]
pub struct EditHistory {
    history: Vec<EditCommand>,
    future: Vec<EditCommand>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            history: Vec::with_capacity(max_depth.min(64)),
            future: Vec::new(),
            max_depth,
        }
    }

    /// Führt ein Kommando aus und zeichnet es bei Erfolg auf.
    ///
    /// Ein fehlgeschlagenes Kommando hinterlässt keine Spur; die Redo-Liste
    /// bleibt dann erhalten.
    pub fn perform(
        &mut self,
        command: EditCommand,
        model: &mut NetworkModel,
    ) -> Result<(), ModelError> {
        command.execute(model)?;
        log::debug!("Ausgeführt: {}", command.description());
        self.push_history(command);
        self.future.clear();
        Ok(())
    }

    /// Nimmt das jüngste Kommando zurück. Gibt `false` zurück, wenn nichts zu tun war.
    pub fn undo(&mut self, model: &mut NetworkModel) -> Result<bool, ModelError> {
        let Some(command) = self.history.pop() else {
            return Ok(false);
        };
        if let Err(e) = command.revert(model) {
            self.history.push(command);
            return Err(e);
        }
        log::debug!("Rückgängig: {}", command.description());
        self.future.push(command);
        Ok(true)
    }

    /// Wiederholt das zuletzt zurückgenommene Kommando.
    pub fn redo(&mut self, model: &mut NetworkModel) -> Result<bool, ModelError> {
        let Some(command) = self.future.pop() else {
            return Ok(false);
        };
        if let Err(e) = command.execute(model) {
            self.future.push(command);
            return Err(e);
        }
        log::debug!("Wiederholt: {}", command.description());
        self.push_history(command);
        Ok(true)
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Anzahl rücknehmbarer Schritte
    pub fn undo_len(&self) -> usize {
        self.history.len()
    }

    /// Anzahl wiederholbarer Schritte
    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    /// Verwirft beide Stacks (z.B. nach dem Laden einer Datei).
    pub fn clear(&mut self) {
        self.history.clear();
        self.future.clear();
    }

    fn push_history(&mut self, command: EditCommand) {
        if self.max_depth == 0 {
            return;
        }
        if self.history.len() >= self.max_depth {
            self.history.remove(0);
        }
        self.history.push(command);
    }
}
