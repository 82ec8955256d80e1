//! Handler für die Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;

/// Übernimmt Lage und Größe der Zeichenfläche.
pub fn set_surface_layout(state: &mut AppState, origin: glam::Vec2, size: [f32; 2]) {
    use_cases::viewport::set_surface_layout(state, origin, size);
}
