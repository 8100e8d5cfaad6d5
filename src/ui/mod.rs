//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Brand header, step indicator, status line and nav bar
//! - `register` - Registration wizard screens
//! - `checkout` - Add-ons, coupon and order summary
//! - `dashboard` - Mock dashboard tables

mod checkout;
mod dashboard;
mod header;
mod register;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to the
/// screen submodules based on the current mode.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI for the current state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        self.header.render_header(f, chunks[0], state);

        match state.mode {
            AppMode::Register => register::render_register_screen(f, chunks[1], &state.wizard),
            AppMode::Checkout => match &state.checkout {
                Some(session) => {
                    checkout::render_checkout_screen(f, chunks[1], session, state.checkout_focus)
                }
                None => header::render_instructions(f, chunks[1], "No checkout in progress"),
            },
            AppMode::Dashboard => dashboard::render_dashboard_screen(f, chunks[1], &state.dashboard),
        }

        header::render_status(f, chunks[2], &state.status_message);
        header::render_nav_bar(f, chunks[3], &keybinding_ctx.get_nav_items(&state.mode));

        // Help overlay goes on top of everything
        if state.help_visible {
            let area = f.area();
            HelpOverlay::new(&state.mode, keybinding_ctx).render(f, area);
        }
    }
}
