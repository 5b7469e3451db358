//! Use-Cases für mutierende Edit-Operationen.
//!
//! Jede Mutation läuft als `EditCommand` über die History.

mod add_node;
mod delete;
mod move_node;
mod rename;

pub use add_node::create_node_at;
pub use delete::delete_selection;
pub use move_node::{drag_node_to, finish_node_drag, restore_dragged_node};
pub use rename::{delete_char_before_caret, insert_char};

use crate::app::{AppState, EditCommand};

/// Führt ein Edit-Kommando über die History aus.
///
/// Abgelehnte Kommandos (z.B. Namenskollision) werden gewarnt und nicht
/// aufgezeichnet. Gibt zurück, ob das Kommando ausgeführt wurde.
pub(crate) fn perform_edit(state: &mut AppState, command: EditCommand) -> bool {
    let description = command.description();
    match state.history.perform(command, &mut state.model) {
        Ok(()) => {
            log::info!("{}", description);
            true
        }
        Err(e) => {
            log::warn!("{} abgelehnt: {}", description, e);
            false
        }
    }
}
