//! egui front-end: explicit UI state, a controller that owns it, and the
//! renderer that derives every frame from it.

/// Controller bridging console logic to the egui UI.
pub mod controller;
/// Shared state types consumed by the renderer.
pub mod state;
/// egui renderer.
pub mod ui;
/// Pure helpers turning responses into render-ready data.
pub mod view_model;
