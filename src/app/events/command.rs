use crate::app::state::EditorMode;
use glam::DVec2;
use std::path::PathBuf;

/// Mutierende Commands, die der Controller zentral ausführt.
///
/// `model_pos` ist bereits über die inverse View-Transformation abgebildet;
/// Transform-Gesten arbeiten dagegen in Screen-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Modus wechseln (bricht laufende Gesten ab)
    SetMode { mode: EditorMode },
    /// Hit-Test und Auswahl; startet ggf. einen Node-Drag
    SelectAt { model_pos: DVec2 },
    /// Gezogenen Node vorläufig verschieben
    DragNodeTo { model_pos: DVec2 },
    /// Node-Drag abschließen (MoveNode bei geänderter Position)
    FinishNodeDrag,
    /// Node mit eindeutigem Standardnamen erstellen
    CreateNodeAt { model_pos: DVec2 },
    /// Verbindung an einem Andockpunkt beginnen
    BeginConnection { model_pos: DVec2 },
    /// Vorschaukurve nachführen
    UpdateConnectionPreview { model_pos: DVec2 },
    /// Verbindung an einem Andockpunkt abschließen
    FinishConnection { model_pos: DVec2 },
    /// Snap-Anzeige beim Überfahren aktualisieren
    UpdateSnapPrompt { model_pos: DVec2 },
    /// Pivot der Transform-Geste setzen
    SetTransformPivot { screen_pos: DVec2 },
    /// Transform-Stack leeren und Pivot zurücksetzen
    ClearTransformations,
    /// Transform-Drag beginnen
    BeginTransformGesture { screen_pos: DVec2 },
    /// Vorschau-Transformation nachführen
    UpdateTransformGesture { screen_pos: DVec2 },
    /// Transform-Drag bestätigen
    FinishTransformGesture,
    /// Laufende Geste ohne Mutation abbrechen
    CancelGesture,
    /// Zeichen an der Caret-Position einfügen
    InsertChar { ch: char },
    /// Zeichen vor dem Caret löschen
    DeleteCharBeforeCaret,
    /// Caret um `delta` Zeichen verschieben (ohne Edit-Kommando)
    MoveCaret { delta: isize },
    /// Selektierten Node bzw. Verbindung löschen
    DeleteSelection,
    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f64; 2] },
    /// Neues, leeres Dokument
    NewDocument,
    /// Speichern (None = aktueller Pfad)
    SaveFile { path: Option<PathBuf> },
    /// Datei laden
    LoadFile { path: PathBuf },
}
