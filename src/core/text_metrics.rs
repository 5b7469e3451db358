//! Textvermessung für Node-Beschriftungen.
//!
//! Die Hit-Regionen der Nodes hängen von der gerenderten Textbreite ab.
//! Der Host liefert deshalb dieselbe Vermessung, mit der er auch zeichnet.

/// Schriftmetriken, wie sie der Renderer verwendet.
pub trait TextMetrics {
    /// Breite des Texts in Modell-Einheiten
    fn string_width(&self, text: &str) -> f64;
    /// Abstand Grundlinie → Oberkante
    fn ascent(&self) -> f64;
    /// Abstand Grundlinie → Unterkante
    fn descent(&self) -> f64;
    /// Zeilenhöhe (Ascent + Descent + Leading)
    fn line_height(&self) -> f64;
}

/// Monospace-Metriken: jedes Zeichen hat dieselbe Breite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPitchMetrics {
    /// Breite eines Zeichens
    pub char_width: f64,
    /// Oberlänge
    pub ascent: f64,
    /// Unterlänge
    pub descent: f64,
    /// Zeilenabstand zusätzlich zu Ober- und Unterlänge
    pub leading: f64,
}

impl FixedPitchMetrics {
    /// Erstellt Metriken mit den übergebenen Maßen.
    pub fn new(char_width: f64, ascent: f64, descent: f64, leading: f64) -> Self {
        Self {
            char_width,
            ascent,
            descent,
            leading,
        }
    }
}

impl Default for FixedPitchMetrics {
    fn default() -> Self {
        Self::new(8.0, 12.0, 3.0, 3.0)
    }
}

impl TextMetrics for FixedPitchMetrics {
    fn string_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn ascent(&self) -> f64 {
        self.ascent
    }

    fn descent(&self) -> f64 {
        self.descent
    }

    fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}
