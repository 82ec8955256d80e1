//! Geometrie-Hilfen: Distanz, Hit-Test und Koordinaten-Umrechnung.

use glam::Vec2;

/// Euklidische Distanz zwischen zwei Punkten.
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Prüft, ob der Cursor einen Punkt trifft.
///
/// Trifft nur, wenn die Distanz *strikt kleiner* als `hit_radius` ist.
/// Ein Cursor genau auf dem Rand zählt nicht.
pub fn is_point_clicked(point: Vec2, cursor: Vec2, hit_radius: f32) -> bool {
    distance(point, cursor) < hit_radius
}

/// Rechnet eine absolute Bildschirmposition in Surface-lokale Koordinaten um.
pub fn to_surface_local(screen_pos: Vec2, surface_origin: Vec2) -> Vec2 {
    screen_pos - surface_origin
}

/// Mittelpunkt der Strecke (Anker für das Distanz-Label)
pub fn midpoint(p1: Vec2, p2: Vec2) -> Vec2 {
    (p1 + p2) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Vec2::new(123.5, -42.0);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2::new(100.0, 200.0);
        let b = Vec2::new(400.0, 300.0);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn distance_between_initial_points() {
        let a = Vec2::new(100.0, 200.0);
        let b = Vec2::new(400.0, 300.0);
        assert_relative_eq!(distance(a, b), 316.227_77, epsilon = 1e-3);
    }

    #[test]
    fn hit_at_exact_center() {
        let p = Vec2::new(400.0, 300.0);
        assert!(is_point_clicked(p, p, 8.0));
    }

    #[test]
    fn hit_on_radius_boundary_misses() {
        assert!(!is_point_clicked(Vec2::ZERO, Vec2::new(8.0, 0.0), 8.0));
        assert!(is_point_clicked(Vec2::ZERO, Vec2::new(7.9, 0.0), 8.0));
    }

    #[test]
    fn surface_local_subtracts_origin() {
        let local = to_surface_local(Vec2::new(425.0, 345.0), Vec2::new(20.0, 40.0));
        assert_eq!(local, Vec2::new(405.0, 305.0));
    }

    #[test]
    fn midpoint_of_initial_points() {
        let mid = midpoint(Vec2::new(100.0, 200.0), Vec2::new(400.0, 300.0));
        assert_eq!(mid, Vec2::new(250.0, 250.0));
    }
}
