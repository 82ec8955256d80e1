/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Lage und Größe der Zeichenfläche (jeden Frame gemeldet)
    SurfaceLayoutChanged { origin: glam::Vec2, size: [f32; 2] },
    /// Primärtaste gedrückt (absolute Bildschirmposition)
    PointerPressed { screen_pos: glam::Vec2 },
    /// Zeiger bewegt (absolute Bildschirmposition)
    PointerMoved { screen_pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased,
}
