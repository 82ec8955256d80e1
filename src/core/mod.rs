//! Core-Domänentypen: Punkte, Geometrie-Hilfen und Snap-Policy.

pub mod geometry;
/// Die zwei ziehbaren Punkte der Demo
///
/// - PointId: Auswahl eines der beiden Punkte (statt Referenz)
/// - PointPair: Besitzer beider Punkt-Positionen
pub mod point;
pub mod snap;

pub use geometry::{distance, is_point_clicked, midpoint, to_surface_local};
pub use point::{PointId, PointPair};
pub use snap::{apply_snap_if_close, SnapResult};
