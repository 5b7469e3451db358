//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
///
/// Nicht-endliche oder negative Werte werden auf 0 begrenzt.
pub fn resize(state: &mut AppState, size: [f64; 2]) {
    let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    let size = [sanitize(size[0]), sanitize(size[1])];
    if state.view.viewport_size != size {
        state.view.viewport_size = size;
        state.request_repaint();
    }
}
