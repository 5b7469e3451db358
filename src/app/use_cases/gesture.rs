//! Use-Case: Moduswechsel und Gestenabbruch.

use super::editing::restore_dragged_node;
use crate::app::state::EditorMode;
use crate::app::AppState;

/// Bricht jede laufende Geste ab, ohne etwas aufzuzeichnen.
///
/// Ein vorläufig verschobener Node kehrt an seine Ausgangsposition zurück.
pub fn cancel_gesture(state: &mut AppState) {
    if !state.editor.has_active_gesture() && state.editor.snap_anchor.is_none() {
        return;
    }
    restore_dragged_node(state);
    state.editor.cancel_gestures();
    log::debug!("Laufende Geste abgebrochen");
    state.request_repaint();
}

/// Wechselt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    cancel_gesture(state);
    if state.editor.mode == mode {
        return;
    }
    state.editor.mode = mode;
    log::info!("Modus: {}", mode);
    state.request_repaint();
}
