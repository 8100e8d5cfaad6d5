//! Checkout screen
//!
//! Left column: add-on list, coupon box and the confirm button.
//! Right column: the order summary, recomputed from the session every frame.

use crate::app::CheckoutFocus;
use crate::catalog::{self, ADDON_SERVICES};
use crate::checkout::CheckoutSession;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_checkout_screen(
    f: &mut Frame,
    area: Rect,
    session: &CheckoutSession,
    focus: CheckoutFocus,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Add-ons
            Constraint::Length(3), // Coupon
            Constraint::Length(3), // Confirm
        ])
        .split(columns[0]);

    render_addons(f, left[0], session, focus == CheckoutFocus::Addons);
    render_coupon(f, left[1], session, focus == CheckoutFocus::Coupon);
    render_confirm(f, left[2], session, focus == CheckoutFocus::Confirm);
    render_summary(f, columns[1], session);
}

fn panel(title: &str, active: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if active {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        })
        .title(format!(" {} ", title))
}

fn render_addons(f: &mut Frame, area: Rect, session: &CheckoutSession, active: bool) {
    let items: Vec<ListItem> = ADDON_SERVICES
        .iter()
        .map(|addon| {
            let checkbox = if session.is_selected(addon.id) { "[x] " } else { "[ ] " };
            let mut spans = vec![
                Span::styled(checkbox, Styles::focused()),
                Span::styled(addon.name, Styles::text()),
                Span::raw("  "),
            ];
            if let Some(discounted) = addon.discount_price {
                spans.push(Span::styled(format!("${}", addon.price), Styles::price_struck()));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(format!("${}", discounted), Styles::price()));
            } else {
                spans.push(Span::styled(format!("${}", addon.price), Styles::price()));
            }
            ListItem::new(vec![
                Line::from(spans),
                Line::from(Span::styled(format!("    {}", addon.description), Styles::text_muted())),
            ])
        })
        .collect();

    let mut list_state = ListState::default();
    if active {
        list_state.select(Some(session.cursor()));
    }

    let list = List::new(items)
        .block(panel("Add-on Services", active))
        .highlight_style(Styles::selected());
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_coupon(f: &mut Frame, area: Rect, session: &CheckoutSession, active: bool) {
    let mut spans = vec![Span::styled(session.coupon_input().to_string(), Styles::text())];
    if active {
        spans.push(Span::styled("_", Styles::focused()));
    }
    if session.coupon_applied() {
        spans.push(Span::styled(
            format!("   {}% off applied", session.coupon_percent()),
            Styles::success(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(panel("Coupon Code", active)), area);
}

fn render_confirm(f: &mut Frame, area: Rect, session: &CheckoutSession, active: bool) {
    let style = if active {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };
    let label = format!(" Complete Purchase (${}) ", session.quote().total);
    let button = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(panel("Confirm", active));
    f.render_widget(button, area);
}

fn render_summary(f: &mut Frame, area: Rect, session: &CheckoutSession) {
    let payload = session.payload();
    let package = catalog::resolve_package(&payload.selected_package);
    let quote = session.quote();

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Styles::text_secondary()),
            Span::styled(value, Styles::text()),
        ])
    };

    let mut lines = vec![
        row("Organization", payload.org.name.clone()),
        row("Account", payload.personal.username.clone()),
        Line::from(""),
        row("Package", package.name.to_string()),
        row("Billing", payload.billing_cycle.to_string()),
        row("Package price", format!("${}", quote.base_price)),
    ];

    for id in session.selected_addons() {
        if let Some(addon) = catalog::find_addon(id) {
            lines.push(row(&format!("+ {}", addon.name), format!("${}", addon.effective_price())));
        }
    }

    lines.push(Line::from(""));
    lines.push(row("Subtotal", format!("${}", quote.subtotal)));
    if quote.discount_percent > 0 {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18}", format!("Discount ({}%)", quote.discount_percent)),
                Styles::success(),
            ),
            Span::styled(format!("-${}", quote.discount_amount), Styles::success()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<18}", "Total"), Styles::title()),
        Span::styled(format!("${}", quote.total), Styles::price()),
    ]));

    f.render_widget(Paragraph::new(lines).block(panel("Order Summary", false)), area);
}
