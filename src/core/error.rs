//! Typisierte Fehler der Core-Schicht.

use thiserror::Error;

/// Fehler bei Mutationen des Netzwerk-Modells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Ein anderer Node trägt bereits diesen Namen
    #[error("Node-Name \"{0}\" ist bereits vergeben")]
    DuplicateName(String),
    /// Name enthält Zeichen, die das Dateiformat nicht darstellen kann
    #[error("Ungültiger Node-Name {0:?}: Anführungszeichen und Zeilenumbrüche sind nicht erlaubt")]
    InvalidName(String),
    /// Node-Index außerhalb der Node-Liste
    #[error("Node-Index {index} außerhalb des gültigen Bereichs (0..{len})")]
    NodeIndexOutOfRange { index: usize, len: usize },
    /// Connection-Index außerhalb der Connection-Liste
    #[error("Connection-Index {index} außerhalb des gültigen Bereichs (0..{len})")]
    ConnectionIndexOutOfRange { index: usize, len: usize },
    /// Transformations-Index außerhalb des Transform-Stacks
    #[error("Transformations-Index {index} außerhalb des gültigen Bereichs (0..{len})")]
    TransformIndexOutOfRange { index: usize, len: usize },
}

/// Fehler der View-Transformation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    /// Die effektive Transformation ist singulär und kann nicht invertiert werden
    #[error("View-Transformation ist nicht invertierbar (Determinante {determinant})")]
    NonInvertible { determinant: f64 },
}
