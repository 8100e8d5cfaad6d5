//! Reusable UI components
//!
//! - `keybindings` - Context-aware keybinding registry (nav bar, help, key lookup)
//! - `help_overlay` - Floating help window

pub mod help_overlay;
pub mod keybindings;
