use crate::core::PointId;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Lage und Größe der Zeichenfläche übernehmen
    SetSurfaceLayout { origin: glam::Vec2, size: [f32; 2] },
    /// Drag auf einem getroffenen Punkt starten
    BeginDrag { point: PointId },
    /// Gezogenen Punkt auf Surface-lokale Position setzen und Snap prüfen
    DragPointTo {
        point: PointId,
        local_pos: glam::Vec2,
    },
    /// Drag beenden
    EndDrag,
}
