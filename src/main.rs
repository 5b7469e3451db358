//! Network Editor (headless).
//!
//! Lädt eine Netzwerk-Datei über den Controller, protokolliert eine
//! Zusammenfassung und schreibt sie optional normalisiert wieder aus.

use anyhow::Context;
use network_editor::{AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

const USAGE: &str = "Aufruf: network-editor <eingabe> [<ausgabe>]";

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("Network Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let input = args.next().map(PathBuf::from).context(USAGE)?;
    let output = args.next().map(PathBuf::from);

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    controller.handle_intent(&mut state, AppIntent::OpenFileRequested { path: input })?;

    let scene = controller.build_render_scene(&state);
    log::info!(
        "{}: {} Nodes, {} Verbindungen ({} darstellbar), {} Transformation(en)",
        state.document.display_name(),
        state.node_count(),
        state.connection_count(),
        scene.connections.len(),
        state.model.transformations().len()
    );

    if let Some(path) = output {
        controller.handle_intent(&mut state, AppIntent::SaveAsRequested { path })?;
    }

    Ok(())
}
