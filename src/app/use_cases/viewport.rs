//! Use-Case-Funktionen für den Zeichenflächen-Zustand.

use crate::app::AppState;

/// Aktualisiert Ursprung und Größe der Zeichenfläche.
///
/// Eine geänderte Größe verschiebt die Labels am unteren Rand und fordert
/// deshalb einen Redraw an.
pub fn set_surface_layout(state: &mut AppState, origin: glam::Vec2, size: [f32; 2]) {
    state.view.surface_origin = origin;
    if state.view.surface_size != size {
        state.view.surface_size = size;
        state.view.redraw_requested = true;
    }
}
