//! Core-Domänentypen: Nodes, Connections, Netzwerk-Modell, View-Transformation.

pub mod connection;
pub mod error;
pub mod listener;
/// Core-Datenmodelle des Netzwerk-Editors
///
/// - NetworkModel: Container für Nodes, Connections und Transform-Stack
/// - NetworkNode: Benannter Knoten mit Mittelpunkt
/// - NetworkConnection: Namensbasierte Verbindung zwischen zwei Node-Seiten
pub mod network_model;
pub mod node;
pub mod text_metrics;
pub mod view_transform;

pub use connection::{NetworkConnection, Side};
pub use error::{ModelError, TransformError};
pub use listener::{ListenerId, NetworkListener, RepaintListener};
pub use network_model::{NetworkModel, RemovedNode};
pub use node::{validate_node_name, NetworkNode};
pub use text_metrics::{FixedPitchMetrics, TextMetrics};
pub use view_transform::{
    gesture_transform, invert, screen_to_model, GesturePhase, TransformGesture,
};
