//! Use-Case: Ansicht per Geste um einen Pivot rotieren und skalieren.

use super::editing::perform_edit;
use crate::app::{AppState, EditCommand};
use crate::core::invert;
use glam::DVec2;

/// Setzt den Pivot der nächsten Geste.
pub fn set_pivot(state: &mut AppState, screen_pos: DVec2) {
    state.editor.gesture.set_pivot(screen_pos);
    log::debug!("Pivot gesetzt: ({:.1}, {:.1})", screen_pos.x, screen_pos.y);
    state.request_repaint();
}

/// Leert den Transform-Stack (undobar) und setzt den Pivot auf die Viewport-Mitte.
pub fn clear_transformations(state: &mut AppState) {
    state.editor.gesture.reset_pivot();
    state.request_repaint();
    if state.model.transformations().is_empty() {
        log::debug!("Keine Transformationen zum Zurücksetzen");
        return;
    }
    let command = EditCommand::clear_transformations(&state.model);
    perform_edit(state, command);
}

/// Beginnt einen Transform-Drag.
pub fn begin_gesture(state: &mut AppState, screen_pos: DVec2) {
    let center = state.view.view_center();
    state.editor.gesture.begin(screen_pos, center);
}

/// Berechnet die Vorschau-Transformation für die aktuelle Zeigerposition.
pub fn update_gesture(state: &mut AppState, screen_pos: DVec2) {
    if state.editor.gesture.update(screen_pos).is_some() {
        state.request_repaint();
    }
}

/// Bestätigt die Geste als NewTransformation.
///
/// Identität wird nicht aufgezeichnet; eine Geste, die die Ansicht
/// singulär machen würde, wird verworfen.
pub fn finish_gesture(state: &mut AppState) {
    let Some(transform) = state.editor.gesture.finish() else {
        log::debug!("Transform-Geste ohne Wirkung");
        state.request_repaint();
        return;
    };
    if let Err(e) = invert(transform * state.model.composed_transform()) {
        log::warn!("Transform-Geste verworfen: {}", e);
        state.request_repaint();
        return;
    }
    let command = EditCommand::new_transformation(&state.model, transform);
    perform_edit(state, command);
}
