//! UI-Komponenten: Canvas-Input-Handling.

pub mod input;

pub use input::InputState;
