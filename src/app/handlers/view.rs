//! Handler für Viewport und Ansichts-Transformationen.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f64; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Setzt den Pivot der Transform-Geste.
pub fn set_pivot(state: &mut AppState, screen_pos: DVec2) {
    use_cases::transform::set_pivot(state, screen_pos);
}

/// Leert den Transform-Stack.
pub fn clear_transformations(state: &mut AppState) {
    use_cases::transform::clear_transformations(state);
}

/// Beginnt einen Transform-Drag.
pub fn begin_gesture(state: &mut AppState, screen_pos: DVec2) {
    use_cases::transform::begin_gesture(state, screen_pos);
}

/// Führt die Vorschau-Transformation nach.
pub fn update_gesture(state: &mut AppState, screen_pos: DVec2) {
    use_cases::transform::update_gesture(state, screen_pos);
}

/// Bestätigt die Transform-Geste.
pub fn finish_gesture(state: &mut AppState) {
    use_cases::transform::finish_gesture(state);
}
