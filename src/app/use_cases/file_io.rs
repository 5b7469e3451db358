//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::DocumentState;
use crate::app::AppState;
use crate::core::NetworkModel;
use crate::network_file::{load_network_file, save_network_file};
use anyhow::Context;
use std::path::PathBuf;

/// Ersetzt das Dokument durch ein leeres.
pub fn new_document(state: &mut AppState) {
    state.install_model(NetworkModel::new());
    state.document = DocumentState::new();
    log::info!("Neues Dokument: {}", state.document.default_file_name);
}

/// Lädt die ausgewählte Datei in den AppState.
///
/// Bei einem Fehler bleibt das bisherige Dokument unverändert.
pub fn load_file(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let model = load_network_file(&path)
        .with_context(|| format!("Datei {} konnte nicht geladen werden", path.display()))?;

    log::info!(
        "Netzwerk geladen: {} Nodes, {} Verbindungen",
        model.node_count(),
        model.connection_count()
    );

    state.install_model(model);
    state.document.current_path = Some(path);
    Ok(())
}

/// Speichert unter `path` oder, falls `None`, unter dem aktuellen Pfad.
pub fn save_file(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path
        .or_else(|| state.document.current_path.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Kein Speicherpfad bekannt, bitte 'Speichern unter' verwenden (Vorschlag: {})",
                state.document.default_file_name
            )
        })?;

    save_network_file(&state.model, &path)
        .with_context(|| format!("Datei {} konnte nicht gespeichert werden", path.display()))?;

    state.model.mark_saved();
    log::info!("Gespeichert: {}", path.display());
    state.document.current_path = Some(path);
    state.request_repaint();
    Ok(())
}
