//! Handler für den Drag-Lifecycle (Start, Update, Ende).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointId;

/// Startet einen Drag auf dem getroffenen Punkt.
pub fn begin(state: &mut AppState, point: PointId) {
    use_cases::drag::begin_drag(state, point);
    log::debug!("Drag gestartet: {}", point.label());
}

/// Setzt den gezogenen Punkt und protokolliert Snap-Wechsel.
///
/// Ein Update für einen Punkt, der gerade nicht gezogen wird, ändert nichts
/// und wird als Fehler gemeldet.
pub fn drag_to(
    state: &mut AppState,
    point: PointId,
    local_pos: glam::Vec2,
) -> anyhow::Result<()> {
    let was_snapping = state.interaction.snap_active;
    let Some(result) = use_cases::drag::drag_point_to(state, point, local_pos) else {
        anyhow::bail!("DragPointTo für {} ohne aktiven Drag", point.label());
    };

    if result.is_active() != was_snapping {
        log::debug!(
            "Snapping {} (x: {}, y: {})",
            if result.is_active() { "aktiv" } else { "inaktiv" },
            result.x_snapped,
            result.y_snapped
        );
    }

    Ok(())
}

/// Beendet den laufenden Drag.
pub fn end(state: &mut AppState) {
    if let Some(point) = use_cases::drag::end_drag(state) {
        log::debug!(
            "Drag beendet: {} bei ({}, {})",
            point.label(),
            state.points.get(point).x,
            state.points.get(point).y
        );
    }
}
