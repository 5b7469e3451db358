//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::NewDocument => handlers::file_io::new_document(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,

            // === Modus & Auswahl ===
            AppCommand::SetMode { mode } => handlers::selection::set_mode(state, mode),
            AppCommand::SelectAt { model_pos } => handlers::selection::select_at(state, model_pos),
            AppCommand::MoveCaret { delta } => handlers::selection::move_caret(state, delta),
            AppCommand::CancelGesture => handlers::selection::cancel_gesture(state),

            // === Node-Edits ===
            AppCommand::CreateNodeAt { model_pos } => {
                handlers::editing::create_node_at(state, model_pos)
            }
            AppCommand::DragNodeTo { model_pos } => {
                handlers::editing::drag_node_to(state, model_pos)
            }
            AppCommand::FinishNodeDrag => handlers::editing::finish_node_drag(state),
            AppCommand::InsertChar { ch } => handlers::editing::insert_char(state, ch),
            AppCommand::DeleteCharBeforeCaret => {
                handlers::editing::delete_char_before_caret(state)
            }
            AppCommand::DeleteSelection => handlers::editing::delete_selection(state),

            // === Verbindungen ===
            AppCommand::BeginConnection { model_pos } => {
                handlers::connection::begin(state, model_pos)
            }
            AppCommand::UpdateConnectionPreview { model_pos } => {
                handlers::connection::update_preview(state, model_pos)
            }
            AppCommand::FinishConnection { model_pos } => {
                handlers::connection::finish(state, model_pos)
            }
            AppCommand::UpdateSnapPrompt { model_pos } => {
                handlers::connection::update_snap_prompt(state, model_pos)
            }

            // === Viewport & Transformation ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetTransformPivot { screen_pos } => {
                handlers::view::set_pivot(state, screen_pos)
            }
            AppCommand::ClearTransformations => handlers::view::clear_transformations(state),
            AppCommand::BeginTransformGesture { screen_pos } => {
                handlers::view::begin_gesture(state, screen_pos)
            }
            AppCommand::UpdateTransformGesture { screen_pos } => {
                handlers::view::update_gesture(state, screen_pos)
            }
            AppCommand::FinishTransformGesture => handlers::view::finish_gesture(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
