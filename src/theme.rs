//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles of every screen. Screens
//! should reach for [`Styles`] first and only use [`Colors`] directly when
//! composing something the pre-built styles do not cover.
//!
//! # Usage
//! ```rust
//! use dwamee::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Brand accent - borders, titles, highlights
    pub const PRIMARY: Color = Color::Rgb(37, 99, 235);

    /// Secondary accent - prices, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Applied discounts and completed steps
    pub const SUCCESS: Color = Color::Green;

    /// Highlight for "most popular" and struck prices
    pub const WARNING: Color = Color::Yellow;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Rgb(37, 99, 235);

    /// Unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Rgb(37, 99, 235);

    /// Selected item text
    pub const SELECTED_FG: Color = Color::White;

    /// Nav bar key hints
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Step indicator: finished
    pub const STEP_COMPLETE: Color = Color::Green;

    /// Step indicator: not reached yet
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (brand, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused input (brand highlight)
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Prices and totals
    pub fn price() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Original price shown next to a discounted one
    pub fn price_struck() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn badge() -> Style {
        Style::default()
            .fg(Colors::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Active/selected button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }
}
