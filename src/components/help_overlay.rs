//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled("  Dwamee Help  ", Styles::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Styles::text_muted()),
                Span::styled(mode.title().to_string(), Style::default().fg(Colors::SECONDARY)),
            ]),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::focused()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Press F1 or Esc to close",
            Styles::text_muted(),
        )));
        lines
    }

    /// Number of content lines (borders excluded)
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay centered on `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(60, 70, parent);
        f.render_widget(Clear, area);
        let help = Paragraph::new(self.content.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(" Help "),
        );
        f.render_widget(help, area);
    }
}

/// A rectangle of the given percentages centered within `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
