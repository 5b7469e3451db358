//! Writer für Netzwerk-Dateien.

use super::NetworkFileError;
use crate::core::NetworkModel;
use std::fmt::Write as _;
use std::path::Path;

/// Schreibt ein Modell im Zeilenformat.
///
/// Koordinaten nutzen die `Debug`-Darstellung von `f64` (`100.0`, `0.5`),
/// die verlustfrei zurückgelesen wird.
pub fn write_network(model: &NetworkModel) -> String {
    let mut output = String::new();
    for node in model.nodes() {
        let _ = writeln!(output, "N {:?} {:?} \"{}\"", node.x(), node.y(), node.name);
    }
    for connection in model.connections() {
        let _ = writeln!(
            output,
            "C \"{}\" {} \"{}\" {}",
            connection.node1, connection.side1, connection.node2, connection.side2
        );
    }
    output
}

/// Schreibt das Modell in eine Datei.
pub fn save_network_file(model: &NetworkModel, path: &Path) -> Result<(), NetworkFileError> {
    std::fs::write(path, write_network(model))?;
    Ok(())
}
