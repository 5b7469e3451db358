//! Zentrale Konfiguration für den Netzwerk-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::FixedPitchMetrics;
use crate::geometry::HitTestConfig;
use serde::{Deserialize, Serialize};

// ── Beschriftung ────────────────────────────────────────────────────

/// Zeichenbreite der eingebauten Monospace-Vermessung.
pub const LABEL_CHAR_WIDTH: f64 = 8.0;
/// Oberlänge der Beschriftung.
pub const LABEL_ASCENT: f64 = 12.0;
/// Unterlänge der Beschriftung.
pub const LABEL_DESCENT: f64 = 3.0;
/// Zusätzlicher Zeilenabstand.
pub const LABEL_LEADING: f64 = 3.0;

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Quadrierter Pick-Abstand für Verbindungen (effektiver Radius 5).
pub const CONNECTION_PICK_THRESHOLD_SQ: f64 = 25.0;
/// Halbe Kantenlänge der Snap-Box um Andockpunkte.
pub const SNAP_HALF_SIZE: f64 = 8.0;
/// Maximaler Versatz der Bézier-Kontrollpunkte.
pub const MAX_CONTROL_OFFSET: f64 = 100.0;

// ── Editieren ───────────────────────────────────────────────────────

/// Basisname neu erstellter Nodes.
pub const DEFAULT_NODE_NAME: &str = "New node";
/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_CAPACITY: usize = 200;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `network_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Beschriftung ────────────────────────────────────────────
    /// Zeichenbreite der Monospace-Vermessung
    pub label_char_width: f64,
    /// Oberlänge
    pub label_ascent: f64,
    /// Unterlänge
    pub label_descent: f64,
    /// Zeilenabstand
    pub label_leading: f64,

    // ── Hit-Tests ───────────────────────────────────────────────
    /// Quadrierter Pick-Abstand für Verbindungen
    pub connection_pick_threshold_sq: f64,
    /// Halbe Snap-Box um Andockpunkte
    pub snap_half_size: f64,
    /// Maximaler Kontrollpunkt-Versatz
    pub max_control_offset: f64,

    // ── Editieren ───────────────────────────────────────────────
    /// Basisname für neue Nodes
    pub default_node_name: String,
    /// Undo-Tiefe
    pub history_capacity: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            label_char_width: LABEL_CHAR_WIDTH,
            label_ascent: LABEL_ASCENT,
            label_descent: LABEL_DESCENT,
            label_leading: LABEL_LEADING,

            connection_pick_threshold_sq: CONNECTION_PICK_THRESHOLD_SQ,
            snap_half_size: SNAP_HALF_SIZE,
            max_control_offset: MAX_CONTROL_OFFSET,

            default_node_name: DEFAULT_NODE_NAME.to_string(),
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("network-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("network_editor.toml")
    }

    /// Hit-Test-Parameter aus den Optionen.
    pub fn hit_test_config(&self) -> HitTestConfig {
        HitTestConfig {
            pick_threshold_sq: self.connection_pick_threshold_sq,
            max_control_offset: self.max_control_offset,
            snap_half_size: self.snap_half_size,
        }
    }

    /// Eingebaute Textvermessung mit den konfigurierten Maßen.
    pub fn text_metrics(&self) -> FixedPitchMetrics {
        FixedPitchMetrics::new(
            self.label_char_width,
            self.label_ascent,
            self.label_descent,
            self.label_leading,
        )
    }
}
