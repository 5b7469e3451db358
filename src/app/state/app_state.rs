use crate::app::history::EditHistory;
use crate::app::CommandLog;
use crate::core::{ListenerId, NetworkModel, RepaintListener, TextMetrics};
use crate::geometry::HitTestConfig;
use crate::shared::EditorOptions;
use glam::DAffine2;
use std::cell::Cell;
use std::rc::Rc;

use super::{DocumentState, EditorState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Das bearbeitete Netzwerk
    pub model: NetworkModel,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Modus und laufende Gesten
    pub editor: EditorState,
    /// Pfad und Name des Dokuments
    pub document: DocumentState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (kommandobasiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    text_metrics: Box<dyn TextMetrics>,
    repaint: Rc<Cell<bool>>,
    repaint_listener: ListenerId,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut model = NetworkModel::new();
        let listener = RepaintListener::new();
        let repaint = listener.flag();
        let repaint_listener = model.add_listener(Box::new(listener));
        Self {
            model,
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            document: DocumentState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_capacity),
            text_metrics: Box::new(options.text_metrics()),
            options,
            repaint,
            repaint_listener,
        }
    }

    /// Ersetzt das Modell (Laden, Neues Dokument).
    ///
    /// History, Auswahl und Gesten werden verworfen; der Neuzeichnen-Listener
    /// wird am neuen Modell registriert.
    pub fn install_model(&mut self, mut model: NetworkModel) {
        self.model.remove_listener(self.repaint_listener);
        self.repaint_listener = model.add_listener(Box::new(RepaintListener::from_flag(
            Rc::clone(&self.repaint),
        )));
        self.model = model;
        self.history.clear();
        self.selection.clear();
        self.editor.cancel_gestures();
        self.editor.gesture.reset_pivot();
        self.repaint.set(true);
    }

    /// Textvermessung für Hit-Tests und Rendering
    pub fn text_metrics(&self) -> &dyn TextMetrics {
        self.text_metrics.as_ref()
    }

    /// Ersetzt die Textvermessung durch die des Hosts.
    pub fn set_text_metrics(&mut self, metrics: Box<dyn TextMetrics>) {
        self.text_metrics = metrics;
        self.repaint.set(true);
    }

    /// Hit-Test-Parameter aus den Optionen
    pub fn hit_test_config(&self) -> HitTestConfig {
        self.options.hit_test_config()
    }

    /// Effektive View-Transformation inkl. Vorschau der laufenden Geste.
    pub fn effective_transform(&self) -> DAffine2 {
        self.model
            .effective_transform(self.editor.gesture.provisional())
    }

    /// Gibt zurück und setzt zurück, ob seit der letzten Abfrage neu gezeichnet werden muss.
    pub fn take_repaint_request(&self) -> bool {
        self.repaint.replace(false)
    }

    /// Markiert die Ansicht als neu zu zeichnen (View-Änderungen ohne Modellmutation).
    pub fn request_repaint(&self) {
        self.repaint.set(true);
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.model.node_count()
    }

    /// Gibt die Anzahl der Connections zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.model.connection_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
