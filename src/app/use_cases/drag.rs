//! Use-Case: Punkt ziehen mit Achsen-Snapping.

use crate::app::AppState;
use crate::core::{apply_snap_if_close, PointId, SnapResult};

/// Merkt sich den getroffenen Punkt als gezogenen Punkt.
pub fn begin_drag(state: &mut AppState, point: PointId) {
    state.interaction.dragged_point = Some(point);
}

/// Setzt den gezogenen Punkt auf `local_pos`, wendet die Snap-Policy gegen
/// den anderen Punkt an und fordert einen Redraw an.
///
/// Gibt `None` zurück (ohne Mutation), wenn `point` nicht der gezogene Punkt ist.
pub fn drag_point_to(
    state: &mut AppState,
    point: PointId,
    local_pos: glam::Vec2,
) -> Option<SnapResult> {
    if state.interaction.dragged_point != Some(point) {
        return None;
    }

    let (dragged, other) = state.points.dragged_and_other(point);
    *dragged = local_pos;
    let result = apply_snap_if_close(dragged, other, state.options.snap_threshold);

    state.interaction.snap_active = result.is_active();
    state.view.redraw_requested = true;

    Some(result)
}

/// Beendet den Drag und gibt den zuvor gezogenen Punkt zurück.
///
/// `snap_active` bleibt unverändert: eine eingerastete Linie bleibt nach dem
/// Loslassen ausgerichtet, die Meldung bleibt daher sichtbar.
pub fn end_drag(state: &mut AppState) -> Option<PointId> {
    state.interaction.dragged_point.take()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn dragging(point: PointId) -> AppState {
        let mut state = AppState::new();
        begin_drag(&mut state, point);
        state.view.redraw_requested = false;
        state
    }

    #[test]
    fn drag_moves_point_and_requests_redraw() {
        let mut state = dragging(PointId::One);

        let result = drag_point_to(&mut state, PointId::One, Vec2::new(250.0, 50.0));

        assert_eq!(result, Some(SnapResult::default()));
        assert_eq!(state.points.one, Vec2::new(250.0, 50.0));
        assert_eq!(state.points.two, Vec2::new(400.0, 300.0));
        assert!(!state.interaction.snap_active);
        assert!(state.view.redraw_requested);
    }

    #[test]
    fn drag_snaps_against_other_point() {
        let mut state = dragging(PointId::Two);

        drag_point_to(&mut state, PointId::Two, Vec2::new(115.0, 420.0));

        assert_eq!(state.points.two, Vec2::new(100.0, 420.0));
        assert!(state.interaction.snap_active);
    }

    #[test]
    fn snap_flag_follows_latest_move() {
        let mut state = dragging(PointId::Two);

        drag_point_to(&mut state, PointId::Two, Vec2::new(400.0, 210.0));
        assert!(state.interaction.snap_active);

        drag_point_to(&mut state, PointId::Two, Vec2::new(450.0, 350.0));
        assert!(!state.interaction.snap_active);
        assert_eq!(state.points.two, Vec2::new(450.0, 350.0));
    }

    #[test]
    fn drag_for_other_point_is_rejected() {
        let mut state = dragging(PointId::One);

        let result = drag_point_to(&mut state, PointId::Two, Vec2::new(0.0, 0.0));

        assert_eq!(result, None);
        assert_eq!(state.points.two, Vec2::new(400.0, 300.0));
        assert!(!state.view.redraw_requested);
    }

    #[test]
    fn end_drag_keeps_snap_flag_and_positions() {
        let mut state = dragging(PointId::Two);
        drag_point_to(&mut state, PointId::Two, Vec2::new(418.0, 200.0));

        assert_eq!(end_drag(&mut state), Some(PointId::Two));

        assert!(!state.interaction.is_dragging());
        assert!(state.interaction.snap_active);
        assert_eq!(state.points.two, Vec2::new(418.0, 200.0));
    }
}
