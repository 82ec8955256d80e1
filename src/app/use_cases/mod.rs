//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drag;
pub mod viewport;
