//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::distance;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let point_one = state.points.one;
    let point_two = state.points.two;

    RenderScene {
        point_one,
        point_two,
        distance: distance(point_one, point_two),
        snap_active: state.interaction.snap_active,
        surface_size: state.view.surface_size,
    }
}
