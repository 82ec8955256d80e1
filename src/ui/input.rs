//! Canvas-Input-Handling: Maus-Events → AppIntent.

use crate::app::AppIntent;

/// Verwaltet den Input-Zustand für die Zeichenfläche
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldete Zeigerposition (verhindert doppelte Move-Intents)
    last_pointer_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen bleiben absolute Bildschirmkoordinaten; die Umrechnung auf
    /// die Zeichenfläche übernimmt das Intent-Mapping anhand des gemeldeten
    /// Ursprungs. Reihenfolge pro Frame: Layout, Press, Move, Release.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::SurfaceLayoutChanged {
            origin: to_vec2(rect.min),
            size: [rect.width(), rect.height()],
        }];

        // Press-Position aus dem Roh-Event: `press_origin` ist leer, wenn das
        // Loslassen im selben Frame ankommt.
        let (press_pos, released, latest_pos) = ui.input(|i| {
            (
                i.events.iter().find_map(primary_press_pos),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        // Nur Klicks auf der Zeichenfläche starten einen Drag
        if let Some(pos) = press_pos.filter(|pos| rect.contains(*pos)) {
            events.push(AppIntent::PointerPressed {
                screen_pos: to_vec2(pos),
            });
        }

        if let Some(pos) = latest_pos {
            if self.last_pointer_pos != Some(pos) {
                self.last_pointer_pos = Some(pos);
                events.push(AppIntent::PointerMoved {
                    screen_pos: to_vec2(pos),
                });
            }
        }

        // Loslassen beendet den Drag auch außerhalb der Zeichenfläche
        if released {
            events.push(AppIntent::PointerReleased);
        }

        events
    }
}

fn primary_press_pos(event: &egui::Event) -> Option<egui::Pos2> {
    match event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => Some(*pos),
        _ => None,
    }
}

fn to_vec2(pos: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(pos.x, pos.y)
}
