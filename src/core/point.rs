use super::geometry::is_point_clicked;
use glam::Vec2;

/// Auswahl eines der beiden festen Punkte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointId {
    /// Erster Punkt (rot)
    One,
    /// Zweiter Punkt (grün)
    Two,
}

impl PointId {
    /// Reihenfolge für den Hit-Test: Punkt eins hat Vorrang.
    pub const HIT_ORDER: [PointId; 2] = [PointId::One, PointId::Two];

    /// Gibt den jeweils anderen (stationären) Punkt zurück.
    pub fn other(self) -> PointId {
        match self {
            PointId::One => PointId::Two,
            PointId::Two => PointId::One,
        }
    }

    /// Anzeigename für Labels und Logs
    pub fn label(self) -> &'static str {
        match self {
            PointId::One => "Object One",
            PointId::Two => "Object Two",
        }
    }
}

/// Die beiden Punkte der Demo. Existieren für die gesamte Laufzeit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPair {
    /// Position von Punkt eins
    pub one: Vec2,
    /// Position von Punkt zwei
    pub two: Vec2,
}

impl PointPair {
    /// Erstellt ein Punktpaar mit den gegebenen Startpositionen.
    pub fn new(one: Vec2, two: Vec2) -> Self {
        Self { one, two }
    }

    /// Position des gewählten Punkts
    pub fn get(&self, id: PointId) -> Vec2 {
        match id {
            PointId::One => self.one,
            PointId::Two => self.two,
        }
    }

    /// Liefert den gezogenen Punkt mutable und den stationären Partner als Kopie.
    pub fn dragged_and_other(&mut self, dragged: PointId) -> (&mut Vec2, Vec2) {
        match dragged {
            PointId::One => (&mut self.one, self.two),
            PointId::Two => (&mut self.two, self.one),
        }
    }

    /// Sucht den Punkt unter dem Cursor.
    ///
    /// Getestet wird in fester Reihenfolge (`PointId::HIT_ORDER`); liegen beide
    /// Punkte im Radius, gewinnt Punkt eins.
    pub fn hit_test(&self, cursor: Vec2, hit_radius: f32) -> Option<PointId> {
        PointId::HIT_ORDER
            .into_iter()
            .find(|&id| is_point_clicked(self.get(id), cursor, hit_radius))
    }
}
