//! Zentrale Konfiguration für die Point-Snap-Demo.
//!
//! `DemoOptions` enthält die beim Start geladenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Snap-Schwellwert: Achsen-Differenz, ab der der gezogene Punkt einrastet.
pub const SNAP_THRESHOLD: f32 = 20.0;
/// Hit-Radius für den Drag-Start (strikt kleiner).
pub const HIT_RADIUS: f32 = 8.0;

// ── Startpositionen ─────────────────────────────────────────────────

/// Startposition von Punkt eins.
pub const POINT_ONE_START: [f32; 2] = [100.0, 200.0];
/// Startposition von Punkt zwei.
pub const POINT_TWO_START: [f32; 2] = [400.0, 300.0];

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Standardgröße der Zeichenfläche in Pixeln.
pub const CANVAS_SIZE: [f32; 2] = [800.0, 600.0];

// ── Rendering ───────────────────────────────────────────────────────

/// Radius der gezeichneten Punkte.
pub const POINT_RADIUS: f32 = 8.0;
/// Linienstärke der Verbindungslinie.
pub const LINE_WIDTH: f32 = 2.0;
/// Schriftgröße für Distanz- und Snap-Label.
pub const LABEL_FONT_SIZE: f32 = 16.0;
/// Schriftgröße für Koordinaten und Attribution.
pub const SMALL_FONT_SIZE: f32 = 14.0;
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Farbe von Punkt eins (RGBA: Rot).
pub const POINT_ONE_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Farbe von Punkt zwei (RGBA: Grün).
pub const POINT_TWO_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Farbe der Verbindungslinie (RGBA: Blau).
pub const LINE_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Farbe für Beschriftungen (RGBA: Schwarz).
pub const TEXT_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Farbe der Snap-Meldung (RGBA: Grün).
pub const SNAP_TEXT_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Attribution, zentriert am unteren Rand.
pub const ATTRIBUTION_TEXT: &str = "© Shahindavoodi";
/// Meldung bei aktivem Snapping.
pub const SNAP_MESSAGE: &str = "Snapping Activated!";

// ── Start-Optionen (serialisierbar) ────────────────────────────────

/// Beim Start geladene Demo-Optionen.
/// Wird als `point_snap_demo.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoOptions {
    /// Snap-Schwellwert in Surface-Einheiten (endlich, nicht negativ)
    pub snap_threshold: f32,
    /// Fenstergröße / Zeichenfläche beim Start [Breite, Höhe]
    pub canvas_size: [f32; 2],
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            canvas_size: CANVAS_SIZE,
        }
    }
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) if opts.is_valid() => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Ok(opts) => {
                    log::warn!(
                        "Ungültiger snap_threshold {} in {}, verwende Standardwerte",
                        opts.snap_threshold,
                        path.display()
                    );
                    Self::default()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Schwellwert muss endlich und nicht negativ sein.
    fn is_valid(&self) -> bool {
        self.snap_threshold.is_finite() && self.snap_threshold >= 0.0
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("point_snap_demo"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("point_snap_demo.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("point_snap_demo_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let opts = DemoOptions::load_from_file(&temp_path("does_not_exist.toml"));
        assert_eq!(opts, DemoOptions::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "snap_threshold = 35.0\n").expect("Schreiben sollte klappen");

        let opts = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts.snap_threshold, 35.0);
        assert_eq!(opts.canvas_size, CANVAS_SIZE);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "snap_threshold = \"viel\"\n").expect("Schreiben sollte klappen");

        let opts = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, DemoOptions::default());
    }

    #[test]
    fn negative_threshold_falls_back_to_defaults() {
        let path = temp_path("negative.toml");
        std::fs::write(&path, "snap_threshold = -1.0\n").expect("Schreiben sollte klappen");

        let opts = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts.snap_threshold, SNAP_THRESHOLD);
    }

    #[test]
    fn non_finite_threshold_falls_back_to_defaults() {
        let path = temp_path("nan.toml");
        std::fs::write(&path, "snap_threshold = nan\ncanvas_size = [640.0, 480.0]\n")
            .expect("Schreiben sollte klappen");

        let opts = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts, DemoOptions::default());
    }

    #[test]
    fn unknown_hit_radius_key_is_ignored() {
        let path = temp_path("hit_radius.toml");
        std::fs::write(&path, "hit_radius = 50.0\nsnap_threshold = 10.0\n")
            .expect("Schreiben sollte klappen");

        let opts = DemoOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        // Unbekannte Schlüssel werden ignoriert; der Radius bleibt fest
        assert_eq!(opts.snap_threshold, 10.0);
    }
}
