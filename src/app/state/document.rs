use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Dateibezogener Zustand des geöffneten Dokuments
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Pfad der zuletzt geladenen oder gespeicherten Datei
    pub current_path: Option<PathBuf>,
    /// Vorgeschlagener Dateiname für "Speichern unter"
    pub default_file_name: String,
}

impl DocumentState {
    /// Erstellt den Zustand eines neuen, ungespeicherten Dokuments.
    pub fn new() -> Self {
        Self {
            current_path: None,
            default_file_name: default_file_name(),
        }
    }

    /// Anzeigename: Dateiname des Pfads oder der Vorschlag.
    pub fn display_name(&self) -> String {
        self.current_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.default_file_name.clone())
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}

/// `network_<unix-sekunden>.network`
fn default_file_name() -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("network_{}.network", seconds)
}
