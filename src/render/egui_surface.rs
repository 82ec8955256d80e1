use super::Surface;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};
use glam::Vec2;

/// Zeichenfläche auf Basis eines egui-Painters.
///
/// Rechnet Surface-lokale Koordinaten über `rect.min` in Bildschirmkoordinaten um.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: Rect,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt eine Zeichenfläche für das allokierte Canvas-Rechteck.
    pub fn new(painter: &'a egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, local: Vec2) -> Pos2 {
        self.rect.min + egui::vec2(local.x, local.y)
    }
}

impl Surface for EguiSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.to_screen(center), radius, color);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color32, width: f32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        );
    }

    fn text(&mut self, pos: Vec2, anchor: Align2, text: &str, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            anchor,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}
