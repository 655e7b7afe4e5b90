//! GUI adapter for the frosted glass demo.
//!
//! This module provides a windowed interface using winit for window
//! management, pixels for framebuffer rendering, and egui for the overlay
//! label.

mod app;
mod gesture;

pub use app::run_gui;
