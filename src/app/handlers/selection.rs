//! Handler für Auswahl, Caret und Modus.

use crate::app::state::EditorMode;
use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Wechselt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    use_cases::gesture::set_mode(state, mode);
}

/// Selektiert, was unter dem Klickpunkt liegt.
pub fn select_at(state: &mut AppState, model_pos: DVec2) {
    use_cases::selection::select_at(state, model_pos);
}

/// Verschiebt den Caret im selektierten Node.
pub fn move_caret(state: &mut AppState, delta: isize) {
    use_cases::selection::move_caret(state, delta);
}

/// Bricht jede laufende Geste ab.
pub fn cancel_gesture(state: &mut AppState) {
    use_cases::gesture::cancel_gesture(state);
}
