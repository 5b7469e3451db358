//! Handler für Undo/Redo-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    use_cases::gesture::cancel_gesture(state);
    match state.history.undo(&mut state.model) {
        Ok(true) => {
            state.selection.clear();
            log::info!("Undo ausgeführt");
        }
        Ok(false) => log::debug!("Undo: nichts zu tun"),
        Err(e) => log::warn!("Undo fehlgeschlagen: {}", e),
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    use_cases::gesture::cancel_gesture(state);
    match state.history.redo(&mut state.model) {
        Ok(true) => {
            state.selection.clear();
            log::info!("Redo ausgeführt");
        }
        Ok(false) => log::debug!("Redo: nichts zu tun"),
        Err(e) => log::warn!("Redo fehlgeschlagen: {}", e),
    }
}
