//! Use-Case: Node per Drag verschieben.

use super::perform_edit;
use crate::app::{AppState, EditCommand};
use glam::DVec2;

/// Verschiebt den gezogenen Node vorläufig (ohne History-Eintrag).
///
/// Die Zielposition wird auf nicht-negative Koordinaten begrenzt.
pub fn drag_node_to(state: &mut AppState, model_pos: DVec2) {
    let Some(drag) = state.editor.node_drag else {
        log::debug!("Drag ohne gegriffenen Node ignoriert");
        return;
    };
    let target = (model_pos - drag.grab_offset).max(DVec2::ZERO);
    if let Err(e) = state.model.move_node(drag.index, target) {
        log::warn!("Node-Drag abgebrochen: {}", e);
        state.editor.node_drag = None;
    }
}

/// Schließt den Drag ab und zeichnet bei geänderter Position ein MoveNode auf.
pub fn finish_node_drag(state: &mut AppState) {
    let Some(drag) = state.editor.node_drag.take() else {
        return;
    };
    let Some(current) = state.model.node(drag.index).map(|n| n.position) else {
        return;
    };
    if current == drag.start_position {
        log::debug!("Node #{} nicht bewegt", drag.index);
        return;
    }
    perform_edit(
        state,
        EditCommand::move_node(drag.index, drag.start_position, current),
    );
}

/// Setzt einen abgebrochenen Drag auf die Ausgangsposition zurück.
pub fn restore_dragged_node(state: &mut AppState) {
    let Some(drag) = state.editor.node_drag.take() else {
        return;
    };
    if let Err(e) = state.model.move_node(drag.index, drag.start_position) {
        log::warn!("Node #{} nicht zurücksetzbar: {}", drag.index, e);
    }
}
