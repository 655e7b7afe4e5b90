//! Input adapters for the frost panel demo.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into slide gestures.

#[cfg(feature = "gui")]
pub mod gui;
