//! Header and common widget rendering
//!
//! Brand header with the registration step indicator, the status line and
//! the key-hint navigation bar.

use crate::app::{AppMode, AppState};
use crate::components::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the brand line
pub struct HeaderRenderer {
    brand: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            brand: Line::from(vec![
                Span::styled("◆ Dwamee", Styles::title()),
                Span::styled("  Smart attendance for growing teams", Styles::text_muted()),
            ]),
        }
    }

    /// Render the header: brand on the left, mode or step on the right
    pub fn render_header(&self, f: &mut Frame, area: Rect, state: &AppState) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Styles::border_inactive());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let right = match state.mode {
            AppMode::Register => step_indicator(state.wizard.step()),
            mode => Line::from(Span::styled(mode.title(), Styles::focused())),
        };
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(right.width() as u16)])
            .split(inner);

        f.render_widget(Paragraph::new(self.brand.clone()), chunks[0]);
        f.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[1]);
    }
}

/// `Step n of 3` followed by one marker per step
fn step_indicator(current: WizardStep) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("Step {} of {}  ", current.number(), WizardStep::TOTAL_STEPS),
        Styles::text_secondary(),
    )];
    for step in WizardStep::all() {
        let style = if *step == current {
            Styles::focused()
        } else if step.number() < current.number() {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        };
        let marker = if step.number() < current.number() { "✓" } else { "●" };
        spans.push(Span::styled(format!("{} {}  ", marker, step.title()), style));
    }
    Line::from(spans)
}

/// Render centered instruction text
pub fn render_instructions(f: &mut Frame, area: Rect, text: &str) {
    let instructions = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Styles::text_secondary());
    f.render_widget(instructions, area);
}

/// Render the one-line status message
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(message.to_string(), Styles::text_secondary()),
    ]));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for item in items {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::selected()));
        spans.push(Span::styled(
            format!(" {}  ", item.action_label),
            Style::default().fg(Colors::NAV_HINT),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
