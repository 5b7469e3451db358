//! Zeilenbasiertes Textformat für Netzwerk-Diagramme.
//!
//! ```text
//! N 100.0 100.0 "A"
//! N 300.0 100.0 "B"
//! C "A" R "B" L
//! ```
//!
//! Erst alle Nodes, dann alle Verbindungen, jeweils in Modellreihenfolge.

pub mod parser;
pub mod writer;

use crate::core::ModelError;
use thiserror::Error;

pub use parser::{load_network_file, parse_network};
pub use writer::{save_network_file, write_network};

/// Fehler beim Lesen oder Schreiben einer Netzwerk-Datei.
#[derive(Debug, Error)]
pub enum NetworkFileError {
    /// Zeile entspricht keinem bekannten Eintrag
    #[error("Zeile {line}: {reason}")]
    Malformed { line: usize, reason: String },
    /// Zeile ist syntaktisch korrekt, verletzt aber eine Modellregel
    #[error("Zeile {line}: {source}")]
    InvalidModel {
        line: usize,
        #[source]
        source: ModelError,
    },
    /// Datei konnte nicht gelesen oder geschrieben werden
    #[error("Dateizugriff fehlgeschlagen: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkFileError {
    /// Zeilennummer (1-basiert), falls der Fehler einer Zeile zugeordnet ist.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Malformed { line, .. } | Self::InvalidModel { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
