//! Handler für das Verbindungswerkzeug.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Beginnt eine Verbindung am Andockpunkt unter dem Zeiger.
pub fn begin(state: &mut AppState, model_pos: DVec2) {
    use_cases::connection_tool::begin_connection(state, model_pos);
}

/// Führt die Vorschaukurve nach.
pub fn update_preview(state: &mut AppState, model_pos: DVec2) {
    use_cases::connection_tool::update_connection_preview(state, model_pos);
}

/// Schließt die Verbindung ab.
pub fn finish(state: &mut AppState, model_pos: DVec2) {
    use_cases::connection_tool::finish_connection(state, model_pos);
}

/// Aktualisiert die Snap-Anzeige.
pub fn update_snap_prompt(state: &mut AppState, model_pos: DVec2) {
    use_cases::connection_tool::update_snap_prompt(state, model_pos);
}
