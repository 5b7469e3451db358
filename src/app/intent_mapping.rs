//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::EditorMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::screen_to_model;
use glam::DVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { screen_pos } => map_pointer_pressed(state, screen_pos),
        AppIntent::PointerDragged { screen_pos } => map_pointer_dragged(state, screen_pos),
        AppIntent::PointerReleased { screen_pos } => map_pointer_released(state, screen_pos),
        AppIntent::PointerClicked {
            screen_pos,
            click_count,
        } => map_pointer_clicked(state, screen_pos, click_count),
        AppIntent::PointerMoved { screen_pos } => {
            if state.editor.mode != EditorMode::CreateConnection {
                return vec![];
            }
            with_model_pos(state, screen_pos, |model_pos| AppCommand::UpdateSnapPrompt {
                model_pos,
            })
        }

        AppIntent::CharTyped { ch } => {
            if ch.is_control() {
                vec![]
            } else {
                vec![AppCommand::InsertChar { ch }]
            }
        }
        AppIntent::BackspacePressed => vec![AppCommand::DeleteCharBeforeCaret],
        AppIntent::CaretLeftPressed => vec![AppCommand::MoveCaret { delta: -1 }],
        AppIntent::CaretRightPressed => vec![AppCommand::MoveCaret { delta: 1 }],
        AppIntent::FocusLost => vec![AppCommand::CancelGesture],

        AppIntent::SetModeRequested { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::DeleteSelectionRequested => vec![AppCommand::DeleteSelection],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::NewDocumentRequested => vec![AppCommand::NewDocument],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested { path } => vec![AppCommand::SaveFile { path: Some(path) }],
        AppIntent::OpenFileRequested { path } => vec![AppCommand::LoadFile { path }],
    }
}

/// Bildet den Screen-Punkt in Modell-Koordinaten ab und baut daraus den Command.
///
/// Ist die View-Transformation singulär, wird die Geste abgebrochen.
fn with_model_pos(
    state: &AppState,
    screen_pos: DVec2,
    build: impl FnOnce(DVec2) -> AppCommand,
) -> Vec<AppCommand> {
    match screen_to_model(state.effective_transform(), screen_pos) {
        Ok(model_pos) => vec![build(model_pos)],
        Err(e) => {
            log::warn!("Zeigerposition nicht abbildbar, Geste abgebrochen: {}", e);
            vec![AppCommand::CancelGesture]
        }
    }
}

fn map_pointer_pressed(state: &AppState, screen_pos: DVec2) -> Vec<AppCommand> {
    match state.editor.mode {
        EditorMode::Select => {
            with_model_pos(state, screen_pos, |model_pos| AppCommand::SelectAt { model_pos })
        }
        EditorMode::CreateConnection => with_model_pos(state, screen_pos, |model_pos| {
            AppCommand::BeginConnection { model_pos }
        }),
        EditorMode::Transform => vec![AppCommand::BeginTransformGesture { screen_pos }],
        EditorMode::CreateNode => vec![],
    }
}

fn map_pointer_dragged(state: &AppState, screen_pos: DVec2) -> Vec<AppCommand> {
    match state.editor.mode {
        EditorMode::Select if state.editor.node_drag.is_some() => {
            with_model_pos(state, screen_pos, |model_pos| AppCommand::DragNodeTo {
                model_pos,
            })
        }
        EditorMode::CreateConnection if state.editor.connection_draft.is_some() => {
            with_model_pos(state, screen_pos, |model_pos| {
                AppCommand::UpdateConnectionPreview { model_pos }
            })
        }
        EditorMode::Transform if state.editor.gesture.is_dragging() => {
            vec![AppCommand::UpdateTransformGesture { screen_pos }]
        }
        _ => vec![],
    }
}

fn map_pointer_released(state: &AppState, screen_pos: DVec2) -> Vec<AppCommand> {
    match state.editor.mode {
        EditorMode::Select if state.editor.node_drag.is_some() => {
            vec![AppCommand::FinishNodeDrag]
        }
        EditorMode::CreateConnection if state.editor.connection_draft.is_some() => {
            with_model_pos(state, screen_pos, |model_pos| AppCommand::FinishConnection {
                model_pos,
            })
        }
        EditorMode::Transform if state.editor.gesture.is_dragging() => {
            vec![AppCommand::FinishTransformGesture]
        }
        _ => vec![],
    }
}

fn map_pointer_clicked(state: &AppState, screen_pos: DVec2, click_count: u32) -> Vec<AppCommand> {
    match (state.editor.mode, click_count) {
        (EditorMode::CreateNode, 1) => with_model_pos(state, screen_pos, |model_pos| {
            AppCommand::CreateNodeAt { model_pos }
        }),
        (EditorMode::Transform, 1) => vec![AppCommand::SetTransformPivot { screen_pos }],
        (EditorMode::Transform, n) if n >= 2 => vec![AppCommand::ClearTransformations],
        _ => vec![],
    }
}
