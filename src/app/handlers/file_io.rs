//! Handler für Datei-Operationen (Neu, Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Ersetzt das Dokument durch ein leeres.
pub fn new_document(state: &mut AppState) {
    use_cases::file_io::new_document(state);
}

/// Lädt ein Netzwerk aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_file(state, path)
}

/// Speichert das Netzwerk.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::save_file(state, path)
}
