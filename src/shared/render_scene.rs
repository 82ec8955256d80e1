//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use glam::Vec2;

/// Read-only Daten für einen Redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Position von Punkt eins (Surface-lokal)
    pub point_one: Vec2,
    /// Position von Punkt zwei (Surface-lokal)
    pub point_two: Vec2,
    /// Aktuelle Distanz zwischen beiden Punkten
    pub distance: f32,
    /// Ob zuletzt eine Achse eingerastet ist
    pub snap_active: bool,
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub surface_size: [f32; 2],
}

impl RenderScene {
    /// Text des Distanz-Labels (zwei Nachkommastellen)
    pub fn distance_label(&self) -> String {
        format!("Distance: {:.2}", self.distance)
    }

    /// Koordinaten-Zeilen für die linke untere Ecke, Punkt eins zuerst.
    pub fn coordinate_lines(&self) -> [String; 2] {
        [
            format!(
                "Object One (x, y): ({}, {})",
                self.point_one.x, self.point_one.y
            ),
            format!(
                "Object Two (x, y): ({}, {})",
                self.point_two.x, self.point_two.y
            ),
        ]
    }
}
