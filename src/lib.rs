//! Network Editor Library.
//! Kern eines Editors für benannte Nodes und gekrümmte Verbindungen:
//! Hit-Tests, View-Transformationen und kommandobasiertes Undo/Redo.
//! Der Host zeichnet ausschließlich aus der `RenderScene`.

pub mod app;
pub mod core;
pub mod geometry;
pub mod network_file;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditCommand, EditHistory, EditorMode,
    SelectionState, ViewState,
};
pub use core::{
    FixedPitchMetrics, ModelError, NetworkConnection, NetworkListener, NetworkModel, NetworkNode,
    RepaintListener, Side, TextMetrics, TransformError,
};
pub use geometry::{point_geometry, CubicBezier, GeometryDescriptor, HitTestConfig};
pub use network_file::{load_network_file, save_network_file, NetworkFileError};
pub use shared::{EditorOptions, RenderScene};
