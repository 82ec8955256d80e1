use crate::app::CommandLog;
use crate::core::PointPair;
use crate::shared::options::{POINT_ONE_START, POINT_TWO_START};
use crate::shared::DemoOptions;

use super::{InteractionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die beiden ziehbaren Punkte
    pub points: PointPair,
    /// Drag- und Snap-Zustand
    pub interaction: InteractionState,
    /// Zeichenflächen-Zustand
    pub view: ViewState,
    /// Start-Optionen (Snap-Schwellwert, Hit-Radius, Größe)
    pub options: DemoOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(DemoOptions::default())
    }

    /// Erstellt den Startzustand mit geladenen Optionen.
    pub fn with_options(options: DemoOptions) -> Self {
        Self {
            points: PointPair::new(POINT_ONE_START.into(), POINT_TWO_START.into()),
            interaction: InteractionState::new(),
            view: ViewState::new(options.canvas_size),
            options,
            command_log: CommandLog::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
