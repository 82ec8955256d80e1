//! Snap-Policy: richtet den gezogenen Punkt achsweise am stationären Punkt aus.

use glam::Vec2;

/// Ergebnis einer Snap-Prüfung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapResult {
    /// X-Koordinate wurde übernommen (vertikale Ausrichtung)
    pub x_snapped: bool,
    /// Y-Koordinate wurde übernommen (horizontale Ausrichtung)
    pub y_snapped: bool,
}

impl SnapResult {
    /// `true`, sobald mindestens eine Achse eingerastet ist.
    pub fn is_active(&self) -> bool {
        self.x_snapped || self.y_snapped
    }
}

/// Rastet `dragged` auf die Koordinaten von `other` ein, wenn die jeweilige
/// Achsen-Differenz `<= threshold` ist.
///
/// Beide Differenzen werden vor jeder Mutation berechnet; die Achsen sind
/// unabhängig. Liegen beide im Schwellwert, landet `dragged` exakt auf `other`.
pub fn apply_snap_if_close(dragged: &mut Vec2, other: Vec2, threshold: f32) -> SnapResult {
    let x_difference = (other.x - dragged.x).abs();
    let y_difference = (other.y - dragged.y).abs();

    let result = SnapResult {
        x_snapped: x_difference <= threshold,
        y_snapped: y_difference <= threshold,
    };

    if result.x_snapped {
        dragged.x = other.x;
    }
    if result.y_snapped {
        dragged.y = other.y;
    }

    result
}
