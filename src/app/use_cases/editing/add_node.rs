//! Use-Case: Neuen Node an einer Modellposition hinzufügen.

use super::perform_edit;
use crate::app::{AppState, EditCommand};
use crate::core::NetworkNode;
use glam::DVec2;

/// Fügt einen Node mit eindeutigem Standardnamen hinzu und selektiert ihn.
///
/// Die Position wird auf nicht-negative Koordinaten begrenzt. Der Caret
/// steht am Ende des Namens, sodass direkt weitergetippt werden kann.
pub fn create_node_at(state: &mut AppState, model_pos: DVec2) {
    let position = model_pos.max(DVec2::ZERO);
    let name = state
        .model
        .unique_node_name(&state.options.default_node_name);
    let caret = name.chars().count();
    let index = state.model.node_count();
    let command = EditCommand::new_node(&state.model, NetworkNode::new(name, position));

    if perform_edit(state, command) {
        state.selection.select_node(index, Some(caret));
    }
}
