//! Begrenztes Command-Log für Diagnosezwecke.

use super::AppCommand;
use std::collections::VecDeque;

/// Ein protokollierter Command mit fortlaufender Nummer
#[derive(Debug, Clone)]
pub struct CommandLogEntry {
    /// Laufende Nummer seit Programmstart (beginnt bei 1)
    pub sequence: u64,
    /// Der ausgeführte Command
    pub command: AppCommand,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<CommandLogEntry>,
    next_sequence: u64,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, der älteste Eintrag wird verworfen.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.next_sequence += 1;
        self.entries.push_back(CommandLogEntry {
            sequence: self.next_sequence,
            command,
        });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert über alle Einträge, älteste zuerst.
    pub fn entries(&self) -> impl Iterator<Item = &CommandLogEntry> {
        self.entries.iter()
    }

    /// Der zuletzt protokollierte Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|e| &e.command)
    }
}
