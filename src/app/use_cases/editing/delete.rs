//! Use-Case: Selektierten Node oder selektierte Verbindung löschen.

use super::perform_edit;
use crate::app::use_cases::gesture::cancel_gesture;
use crate::app::{AppState, EditCommand};
use crate::geometry::GeometryDescriptor;

/// Löscht die aktuelle Auswahl; Nodes nehmen ihre Verbindungen mit.
///
/// Ein laufender Node-Drag wird vorher zurückgesetzt.
pub fn delete_selection(state: &mut AppState) {
    cancel_gesture(state);
    let command = match state.selection.descriptor {
        GeometryDescriptor::Node { index, .. } => EditCommand::remove_node(&state.model, index),
        GeometryDescriptor::Connection { index } => {
            EditCommand::remove_connection(&state.model, index)
        }
        GeometryDescriptor::Empty => {
            log::debug!("Löschen: nichts selektiert");
            return;
        }
    };

    match command {
        Ok(command) => {
            if perform_edit(state, command) {
                state.selection.clear();
            }
        }
        Err(e) => {
            log::warn!("Löschen nicht möglich: {}", e);
            state.selection.clear();
        }
    }
}
