use super::Surface;
use egui::{Align2, Color32};
use glam::Vec2;

/// Eine aufgezeichnete Zeichenoperation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        color: Color32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color32,
        width: f32,
    },
    Text {
        pos: Vec2,
        anchor: Align2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Zeichenfläche ohne Fenster: zeichnet alle Operationen der Reihe nach auf.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Aufgezeichnete Operationen in Aufrufreihenfolge
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Erstellt eine leere Aufzeichnung.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Alle gezeichneten Texte in Reihenfolge
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color32) {
        self.ops.push(DrawOp::Clear { color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color32, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn text(&mut self, pos: Vec2, anchor: Align2, text: &str, font_size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            pos,
            anchor,
            text: text.to_string(),
            font_size,
            color,
        });
    }
}
