//! Handler für Node-Edits (Erstellen, Verschieben, Umbenennen, Löschen).

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Erstellt einen Node an der Klickposition.
pub fn create_node_at(state: &mut AppState, model_pos: DVec2) {
    use_cases::editing::create_node_at(state, model_pos);
}

/// Verschiebt den gezogenen Node vorläufig.
pub fn drag_node_to(state: &mut AppState, model_pos: DVec2) {
    use_cases::editing::drag_node_to(state, model_pos);
}

/// Schließt einen Node-Drag ab.
pub fn finish_node_drag(state: &mut AppState) {
    use_cases::editing::finish_node_drag(state);
}

/// Fügt ein Zeichen am Caret ein.
pub fn insert_char(state: &mut AppState, ch: char) {
    use_cases::editing::insert_char(state, ch);
}

/// Löscht das Zeichen vor dem Caret.
pub fn delete_char_before_caret(state: &mut AppState) {
    use_cases::editing::delete_char_before_caret(state);
}

/// Löscht die aktuelle Auswahl.
pub fn delete_selection(state: &mut AppState) {
    use_cases::editing::delete_selection(state);
}
