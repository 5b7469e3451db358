//! Use-Case: Auswahl per Klick (Node mit Caret oder Verbindung).

use crate::app::state::NodeDrag;
use crate::app::use_cases::gesture::cancel_gesture;
use crate::app::AppState;
use crate::geometry::{point_geometry, GeometryDescriptor};
use glam::DVec2;

/// Setzt die Auswahl auf das, was unter `model_pos` liegt.
///
/// Wird ein Node getroffen, beginnt zugleich ein Node-Drag.
pub fn select_at(state: &mut AppState, model_pos: DVec2) {
    // ein nicht abgeschlossener Drag wird verworfen
    cancel_gesture(state);
    let descriptor = point_geometry(
        &state.model,
        state.text_metrics(),
        model_pos,
        &state.hit_test_config(),
    );
    state.selection.descriptor = descriptor;

    state.editor.node_drag = match descriptor {
        GeometryDescriptor::Node { index, .. } => state.model.node(index).map(|node| NodeDrag {
            index,
            start_position: node.position,
            grab_offset: model_pos - node.position,
        }),
        _ => None,
    };

    log::debug!("Auswahl: {:?}", descriptor);
    state.request_repaint();
}
