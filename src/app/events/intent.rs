use crate::app::state::EditorMode;
use glam::DVec2;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Zeigerpositionen sind Screen-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Maustaste gedrückt
    PointerPressed { screen_pos: DVec2 },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { screen_pos: DVec2 },
    /// Maustaste losgelassen
    PointerReleased { screen_pos: DVec2 },
    /// Klick (nach dem Loslassen); `click_count` 2 = Doppelklick
    PointerClicked { screen_pos: DVec2, click_count: u32 },
    /// Zeiger ohne gedrückte Taste bewegt
    PointerMoved { screen_pos: DVec2 },
    /// Zeichen eingegeben
    CharTyped { ch: char },
    /// Rücktaste
    BackspacePressed,
    /// Pfeiltaste links
    CaretLeftPressed,
    /// Pfeiltaste rechts
    CaretRightPressed,
    /// Editor-Fläche hat den Fokus verloren
    FocusLost,
    /// Interaktionsmodus wechseln
    SetModeRequested { mode: EditorMode },
    /// Selektierten Node bzw. Verbindung löschen
    DeleteSelectionRequested,
    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f64; 2] },
    /// Neues, leeres Dokument
    NewDocumentRequested,
    /// Unter dem aktuellen Pfad speichern
    SaveRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveAsRequested { path: PathBuf },
    /// Datei wurde im Dialog ausgewählt (Laden)
    OpenFileRequested { path: PathBuf },
}
