//! Application State: zentrale Datenhaltung.

mod app_state;
mod document;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use document::DocumentState;
pub use editor::{ConnectionDraft, EditorMode, EditorState, NodeDrag};
pub use selection::SelectionState;
pub use view::ViewState;
