//! Use-Case: Caret im Node-Namen bewegen.

use crate::app::AppState;

/// Verschiebt den Caret um `delta` Zeichen innerhalb des Namens.
///
/// Reine View-Änderung: es entsteht kein Edit-Kommando.
pub fn move_caret(state: &mut AppState, delta: isize) {
    let (Some(index), Some(caret)) = (state.selection.selected_node(), state.selection.caret())
    else {
        log::debug!("Caret-Bewegung ohne Caret ignoriert");
        return;
    };
    let Some(len) = state.model.node(index).map(|n| n.name.chars().count()) else {
        return;
    };
    let target = caret.saturating_add_signed(delta).min(len);
    state.selection.set_caret(target);
    state.request_repaint();
}
