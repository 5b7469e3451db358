//! Use-Case: Verbindungen per Drag zwischen Andockpunkten erstellen.

use super::editing::perform_edit;
use crate::app::state::ConnectionDraft;
use crate::app::{AppState, EditCommand};
use crate::core::NetworkConnection;
use crate::geometry::{snap_anchor, Anchor};
use glam::DVec2;

fn snap(state: &AppState, model_pos: DVec2) -> Option<Anchor> {
    snap_anchor(
        &state.model,
        state.text_metrics(),
        model_pos,
        state.options.snap_half_size,
    )
}

/// Startet eine Verbindung, wenn der Punkt auf einem Andockpunkt einrastet.
pub fn begin_connection(state: &mut AppState, model_pos: DVec2) {
    let Some(start) = snap(state, model_pos) else {
        log::debug!("Verbindung: kein Andockpunkt unter dem Zeiger");
        state.editor.snap_anchor = None;
        return;
    };
    log::debug!("Verbindung beginnt an {}:{}", start.node_name, start.side);
    state.editor.snap_anchor = Some(start.point);
    state.editor.connection_draft = Some(ConnectionDraft {
        pointer: start.point,
        start,
    });
    state.request_repaint();
}

/// Führt Vorschaukurve und Snap-Anzeige nach.
pub fn update_connection_preview(state: &mut AppState, model_pos: DVec2) {
    let snapped = snap(state, model_pos).map(|a| a.point);
    let Some(draft) = state.editor.connection_draft.as_mut() else {
        return;
    };
    draft.pointer = snapped.unwrap_or(model_pos);
    state.editor.snap_anchor = snapped;
    state.request_repaint();
}

/// Schließt die Verbindung ab, wenn der Zeiger auf einem anderen Andockpunkt losgelassen wird.
pub fn finish_connection(state: &mut AppState, model_pos: DVec2) {
    let Some(draft) = state.editor.connection_draft.take() else {
        return;
    };
    state.editor.snap_anchor = None;
    state.request_repaint();

    let Some(end) = snap(state, model_pos) else {
        log::debug!("Verbindung abgebrochen: kein Andockpunkt am Ziel");
        return;
    };
    if end.node_index == draft.start.node_index && end.side == draft.start.side {
        log::debug!("Verbindung abgebrochen: Start- und Zielanker identisch");
        return;
    }

    let connection = NetworkConnection::new(
        draft.start.node_name,
        draft.start.side,
        end.node_name,
        end.side,
    );
    let command = EditCommand::new_connection(&state.model, connection);
    perform_edit(state, command);
}

/// Aktualisiert die Snap-Anzeige beim Überfahren.
pub fn update_snap_prompt(state: &mut AppState, model_pos: DVec2) {
    let snapped = snap(state, model_pos).map(|a| a.point);
    if snapped != state.editor.snap_anchor {
        state.editor.snap_anchor = snapped;
        state.request_repaint();
    }
}
