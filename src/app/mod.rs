//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod edit_command;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Modell, Auswahl, Gesten, Dokument).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, CommandLogEntry};
pub use controller::AppController;
pub use edit_command::EditCommand;
pub use events::{AppCommand, AppIntent};
pub use history::EditHistory;
pub use intent_mapping::map_intent_to_commands;
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, ConnectionDraft, DocumentState, EditorMode, EditorState, NodeDrag, SelectionState,
    ViewState,
};
