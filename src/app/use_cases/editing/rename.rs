//! Use-Case: Node-Namen an der Caret-Position bearbeiten.
//!
//! Jeder Tastendruck erzeugt ein eigenes RenameNode-Kommando.

use super::perform_edit;
use crate::app::{AppState, EditCommand};

/// Byte-Offset des Zeichenindex `char_index` (oder Länge bei Überlauf).
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Selektierter Node mit Caret, Caret auf die Namenslänge begrenzt.
fn caret_target(state: &AppState) -> Option<(usize, String, usize)> {
    let index = state.selection.selected_node()?;
    let caret = state.selection.caret()?;
    let name = state.model.node(index)?.name.clone();
    let caret = caret.min(name.chars().count());
    Some((index, name, caret))
}

/// Fügt `ch` an der Caret-Position ein und rückt den Caret vor.
pub fn insert_char(state: &mut AppState, ch: char) {
    let Some((index, mut name, caret)) = caret_target(state) else {
        log::debug!("Texteingabe ohne Caret ignoriert");
        return;
    };
    name.insert(byte_offset(&name, caret), ch);

    let command = match EditCommand::rename_node(&state.model, index, name) {
        Ok(command) => command,
        Err(e) => {
            log::warn!("Umbenennen nicht möglich: {}", e);
            return;
        }
    };
    if perform_edit(state, command) {
        state.selection.set_caret(caret + 1);
    }
}

/// Löscht das Zeichen vor dem Caret; am Anfang des Namens passiert nichts.
pub fn delete_char_before_caret(state: &mut AppState) {
    let Some((index, mut name, caret)) = caret_target(state) else {
        log::debug!("Rücktaste ohne Caret ignoriert");
        return;
    };
    if caret == 0 {
        log::debug!("Rücktaste am Namensanfang ignoriert");
        return;
    }
    name.remove(byte_offset(&name, caret - 1));

    let command = match EditCommand::rename_node(&state.model, index, name) {
        Ok(command) => command,
        Err(e) => {
            log::warn!("Umbenennen nicht möglich: {}", e);
            return;
        }
    };
    if perform_edit(state, command) {
        state.selection.set_caret(caret - 1);
    }
}
