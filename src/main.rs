//! Point-Snap-Demo.
//!
//! Zwei ziehbare Punkte mit Verbindungslinie, Live-Distanz und
//! Achsen-Snapping auf einer egui-Zeichenfläche.

use eframe::egui;
use point_snap_demo::{render, ui, AppController, AppIntent, AppState, DemoOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Point-Snap-Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let demo_options = DemoOptions::load_from_file(&DemoOptions::config_path());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(demo_options.canvas_size)
                .with_title("Point-Snap-Demo"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Point-Snap-Demo",
            options,
            Box::new(|_cc| Ok(Box::new(DemoApp::new(demo_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl DemoApp {
    fn new(options: DemoOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let events = self.input.collect_canvas_events(ui, &response);
                self.process_events(events);

                // egui zeichnet jeden Frame komplett; die Szene ist reiner Output des States
                let scene = self.controller.build_render_scene(&self.state);
                let mut surface = render::EguiSurface::new(ui.painter(), rect);
                render::draw_scene(&mut surface, &scene);
            });

        self.maybe_request_repaint(ctx);
    }
}

impl DemoApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.view.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
