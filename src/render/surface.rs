use egui::{Align2, Color32};
use glam::Vec2;

/// Primitive Zeichenoperationen einer 2D-Zeichenfläche.
///
/// Alle Positionen sind Surface-lokal (Ursprung links oben).
pub trait Surface {
    /// Leert die komplette Fläche mit der Hintergrundfarbe.
    fn clear(&mut self, color: Color32);

    /// Zeichnet einen gefüllten Kreis.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color32);

    /// Zeichnet eine Linie mit gegebener Breite.
    fn line(&mut self, from: Vec2, to: Vec2, color: Color32, width: f32);

    /// Zeichnet Text, `anchor` legt fest, welche Ecke des Textes bei `pos` liegt.
    fn text(&mut self, pos: Vec2, anchor: Align2, text: &str, font_size: f32, color: Color32);
}

/// Wandelt eine RGBA-Konstante in eine egui-Farbe um.
pub fn color32(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}
