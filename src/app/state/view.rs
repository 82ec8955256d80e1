use glam::Vec2;

/// Zustand der Zeichenfläche
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Linke obere Ecke der Zeichenfläche in Bildschirmkoordinaten
    pub surface_origin: Vec2,
    /// Größe der Zeichenfläche in Pixel
    pub surface_size: [f32; 2],
    /// Signalisiert dem Host, dass neu gezeichnet werden muss
    pub redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den Start-Zustand; der erste Frame wird immer gezeichnet.
    pub fn new(surface_size: [f32; 2]) -> Self {
        Self {
            surface_origin: Vec2::ZERO,
            surface_size,
            redraw_requested: true,
        }
    }

    /// Liest und quittiert eine ausstehende Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new([0.0, 0.0])
    }
}
