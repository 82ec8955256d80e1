//! Redraw der kompletten Szene.

use super::{color32, RenderScene, Surface};
use crate::core::midpoint;
use crate::shared::options::{
    ATTRIBUTION_TEXT, BACKGROUND_COLOR, LABEL_FONT_SIZE, LINE_COLOR, LINE_WIDTH, POINT_ONE_COLOR,
    POINT_RADIUS, POINT_TWO_COLOR, SMALL_FONT_SIZE, SNAP_MESSAGE, SNAP_TEXT_COLOR, TEXT_COLOR,
};
use egui::Align2;
use glam::Vec2;

/// Zeichnet die Szene neu. Reine Funktion der Szene, ohne Rückwirkung auf den State.
pub fn draw_scene(surface: &mut impl Surface, scene: &RenderScene) {
    let [width, height] = scene.surface_size;

    surface.clear(color32(BACKGROUND_COLOR));

    surface.fill_circle(scene.point_one, POINT_RADIUS, color32(POINT_ONE_COLOR));
    surface.fill_circle(scene.point_two, POINT_RADIUS, color32(POINT_TWO_COLOR));

    surface.line(
        scene.point_one,
        scene.point_two,
        color32(LINE_COLOR),
        LINE_WIDTH,
    );

    // Distanz 10 Einheiten über der Streckenmitte
    let mid = midpoint(scene.point_one, scene.point_two);
    surface.text(
        Vec2::new(mid.x, mid.y - 10.0),
        Align2::LEFT_BOTTOM,
        &scene.distance_label(),
        LABEL_FONT_SIZE,
        color32(TEXT_COLOR),
    );

    let [line_one, line_two] = scene.coordinate_lines();
    surface.text(
        Vec2::new(10.0, height - 30.0),
        Align2::LEFT_BOTTOM,
        &line_one,
        SMALL_FONT_SIZE,
        color32(TEXT_COLOR),
    );
    surface.text(
        Vec2::new(10.0, height - 10.0),
        Align2::LEFT_BOTTOM,
        &line_two,
        SMALL_FONT_SIZE,
        color32(TEXT_COLOR),
    );

    if scene.snap_active {
        surface.text(
            Vec2::new(width - 150.0, height - 20.0),
            Align2::LEFT_BOTTOM,
            SNAP_MESSAGE,
            LABEL_FONT_SIZE,
            color32(SNAP_TEXT_COLOR),
        );
    }

    surface.text(
        Vec2::new(width * 0.5, height - 10.0),
        Align2::CENTER_BOTTOM,
        ATTRIBUTION_TEXT,
        SMALL_FONT_SIZE,
        color32(TEXT_COLOR),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, RecordingSurface};

    fn scene(snap_active: bool) -> RenderScene {
        RenderScene {
            point_one: Vec2::new(100.0, 200.0),
            point_two: Vec2::new(400.0, 300.0),
            distance: 316.227_77,
            snap_active,
            surface_size: [800.0, 600.0],
        }
    }

    #[test]
    fn draw_scene_starts_with_clear_then_points_and_line() {
        let mut surface = RecordingSurface::new();

        draw_scene(&mut surface, &scene(false));

        assert!(matches!(surface.ops[0], DrawOp::Clear { .. }));
        assert_eq!(
            surface.ops[1],
            DrawOp::Circle {
                center: Vec2::new(100.0, 200.0),
                radius: POINT_RADIUS,
                color: color32(POINT_ONE_COLOR),
            }
        );
        assert_eq!(
            surface.ops[3],
            DrawOp::Line {
                from: Vec2::new(100.0, 200.0),
                to: Vec2::new(400.0, 300.0),
                color: color32(LINE_COLOR),
                width: LINE_WIDTH,
            }
        );
    }

    #[test]
    fn distance_label_sits_above_midpoint() {
        let mut surface = RecordingSurface::new();

        draw_scene(&mut surface, &scene(false));

        let label = surface.ops.iter().find_map(|op| match op {
            DrawOp::Text { pos, text, .. } if text.starts_with("Distance") => Some((*pos, text)),
            _ => None,
        });
        let (pos, text) = label.expect("Distanz-Label sollte gezeichnet werden");
        assert_eq!(pos, Vec2::new(250.0, 240.0));
        assert_eq!(text, "Distance: 316.23");
    }

    #[test]
    fn snap_message_only_when_active() {
        let mut inactive = RecordingSurface::new();
        draw_scene(&mut inactive, &scene(false));
        assert!(!inactive.texts().contains(&SNAP_MESSAGE));

        let mut active = RecordingSurface::new();
        draw_scene(&mut active, &scene(true));
        assert!(active.texts().contains(&SNAP_MESSAGE));
    }

    #[test]
    fn attribution_is_centered_at_bottom() {
        let mut surface = RecordingSurface::new();

        draw_scene(&mut surface, &scene(false));

        assert_eq!(
            surface.ops.last(),
            Some(&DrawOp::Text {
                pos: Vec2::new(400.0, 590.0),
                anchor: Align2::CENTER_BOTTOM,
                text: ATTRIBUTION_TEXT.to_string(),
                font_size: SMALL_FONT_SIZE,
                color: color32(TEXT_COLOR),
            })
        );
    }

    #[test]
    fn redraw_is_idempotent() {
        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();

        draw_scene(&mut first, &scene(true));
        draw_scene(&mut second, &scene(true));

        assert_eq!(first.ops, second.ops);
    }
}
