//! Mock dashboard screen

use crate::app::DashboardState;
use crate::dashboard::DashboardView;
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};
use strum::IntoEnumIterator;

pub fn render_dashboard_screen(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // View tabs
            Constraint::Length(1), // Filters
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Totals
        ])
        .split(area);

    let views: Vec<DashboardView> = DashboardView::iter().collect();
    let selected = views.iter().position(|v| *v == state.view).unwrap_or(0);
    let tabs = Tabs::new(views.iter().map(|v| v.title()).collect::<Vec<_>>())
        .select(selected)
        .style(Styles::text_secondary())
        .highlight_style(Styles::selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive()),
        );
    f.render_widget(tabs, chunks[0]);

    f.render_widget(Paragraph::new(filter_line(state)), chunks[1]);

    let table = state.table();
    let widths: Vec<Constraint> = table
        .column_widths()
        .into_iter()
        .map(|w| Constraint::Length(w as u16))
        .collect();
    let header = Row::new(table.headers.iter().map(|h| Cell::from(*h))).style(Styles::focused());
    let rows = table
        .rows
        .iter()
        .skip(state.scroll)
        .map(|cells| Row::new(cells.iter().map(|c| Cell::from(c.as_str()))).style(Styles::text()));

    let widget = Table::new(rows, widths).header(header).column_spacing(2).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(format!(" {} ({}) ", state.view.title(), table.rows.len())),
    );
    f.render_widget(widget, chunks[2]);

    if let Some(footer) = &table.footer {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {}", footer), Styles::price())),
            chunks[3],
        );
    }
}

fn filter_line(state: &DashboardState) -> Line<'static> {
    let mut spans = vec![
        Span::styled(" Search: ", Styles::text_secondary()),
        Span::styled(format!("{}_", state.filter.search), Styles::text()),
    ];
    if state.view.has_dates() {
        let from = state.filter.start_date.clone().unwrap_or_else(|| "any".to_string());
        let to = state.filter.end_date.clone().unwrap_or_else(|| "any".to_string());
        spans.push(Span::styled(format!("   Created: {} .. {}", from, to), Styles::text_muted()));
    }
    if state.view == DashboardView::DailyReport {
        spans.push(Span::styled(format!("   Type: {}", state.entry_type), Styles::text_muted()));
    }
    Line::from(spans)
}
