use glam::DVec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f64; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
        }
    }

    /// Mitte des Viewports in Screen-Koordinaten (Standard-Pivot).
    pub fn view_center(&self) -> DVec2 {
        DVec2::new(self.viewport_size[0] / 2.0, self.viewport_size[1] / 2.0)
    }
}
