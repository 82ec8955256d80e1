//! Point-Snap-Demo Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionState, ViewState};
pub use crate::core::{
    apply_snap_if_close, distance, is_point_clicked, PointId, PointPair, SnapResult,
};
pub use shared::{DemoOptions, RenderScene};
