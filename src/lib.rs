//! Knob Area
//!
//! A headless rotary knob controller: maps pointer, touch and keyboard input
//! onto a bounded, stepped value and a display angle.

/// Knob controller, dial geometry and input handling
pub mod knob;

/// Profile-based configuration
pub mod config;

/// Build-time information (git SHA, rustc, target, etc.)
pub mod build_info;

/// Self-checks for presets and dial mapping
pub mod health;
