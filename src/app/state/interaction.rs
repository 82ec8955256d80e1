use crate::core::PointId;

/// Zustand der Drag-Interaktion
///
/// `Idle` entspricht `dragged_point == None`, `Dragging(p)` entspricht `Some(p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Aktuell gezogener Punkt
    pub dragged_point: Option<PointId>,
    /// Ergebnis der letzten Snap-Prüfung. Bleibt nach Drag-Ende erhalten.
    pub snap_active: bool,
}

impl InteractionState {
    /// Erstellt den Leerlauf-Zustand.
    pub fn new() -> Self {
        Self {
            dragged_point: None,
            snap_active: false,
        }
    }

    /// Gibt zurück, ob gerade ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        self.dragged_point.is_some()
    }
}
