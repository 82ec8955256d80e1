//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::to_surface_local;
use crate::shared::options::HIT_RADIUS;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Hier sitzt die Zustandsmaschine `Idle`/`Dragging`: Intents, für die im
/// aktuellen Zustand kein Übergang existiert, ergeben eine leere Sequenz.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SurfaceLayoutChanged { origin, size } => {
            vec![AppCommand::SetSurfaceLayout { origin, size }]
        }
        AppIntent::PointerPressed { screen_pos } => {
            // Ein laufender Drag gehört bis zum Loslassen dem ersten Klick
            if state.interaction.is_dragging() {
                return Vec::new();
            }

            let local_pos = to_surface_local(screen_pos, state.view.surface_origin);
            state
                .points
                .hit_test(local_pos, HIT_RADIUS)
                .map(|point| AppCommand::BeginDrag { point })
                .into_iter()
                .collect()
        }
        AppIntent::PointerMoved { screen_pos } => match state.interaction.dragged_point {
            Some(point) => vec![AppCommand::DragPointTo {
                point,
                local_pos: to_surface_local(screen_pos, state.view.surface_origin),
            }],
            None => Vec::new(),
        },
        AppIntent::PointerReleased => {
            if state.interaction.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
    }
}
