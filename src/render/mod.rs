//! Rendering der Szene über primitive Zeichenoperationen.
//!
//! Die Zeichenfläche ist ein austauschbarer Kollaborateur (`Surface`):
//! im Fenster der egui-Painter, in Tests eine aufzeichnende Fläche.

mod egui_surface;
mod recording;
mod scene_painter;
mod surface;

pub use crate::shared::RenderScene;
pub use egui_surface::EguiSurface;
pub use recording::{DrawOp, RecordingSurface};
pub use scene_painter::draw_scene;
pub use surface::{color32, Surface};
