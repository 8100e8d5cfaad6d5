//! Registration wizard screens
//!
//! Steps 1 and 2 are forms built from [`WizardStep::fields`]. Step 3 shows
//! the billing-cycle switch and one card per package.

use crate::catalog::{self, Package};
use crate::theme::{Colors, Styles};
use crate::types::BillingCycle;
use crate::wizard::{RegistrationWizard, WizardStep};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_register_screen(f: &mut Frame, area: Rect, wizard: &RegistrationWizard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Step body
        ])
        .split(area);

    let step = wizard.step();
    let title = Paragraph::new(step.title())
        .style(Styles::title())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    match step {
        WizardStep::Personal | WizardStep::Organization => render_form(f, chunks[1], wizard),
        WizardStep::Package => render_packages(f, chunks[1], wizard),
    }
}

fn render_form(f: &mut Frame, area: Rect, wizard: &RegistrationWizard) {
    let fields = wizard.step().fields();
    let constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints(constraints)
        .split(area);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let is_current = wizard.focused_field() == Some(*field);
        let value = wizard.value(*field);

        let display_value = if field.is_secret() {
            "*".repeat(value.chars().count())
        } else if field.is_selection() && value.is_empty() {
            "Select nationality".to_string()
        } else {
            value.to_string()
        };

        let (prefix, suffix) = match (is_current, field.is_selection()) {
            (true, true) => ("< ", " >"),
            (true, false) => ("", "_"),
            _ => ("", ""),
        };

        let value_style = if field.is_selection() && value.is_empty() {
            Styles::text_muted()
        } else {
            Styles::text()
        };

        let line = Line::from(vec![
            Span::styled(prefix, Styles::focused()),
            Span::styled(display_value, value_style),
            Span::styled(suffix, Styles::focused()),
        ]);

        let border_style = if is_current {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        };
        let label_style = if is_current {
            Styles::focused()
        } else {
            Styles::text_secondary()
        };

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(format!(" {} ", field.label()), label_style)),
        );
        f.render_widget(widget, *row);
    }
}

fn render_packages(f: &mut Frame, area: Rect, wizard: &RegistrationWizard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    let cycle = wizard.billing_cycle();
    let switch = Line::from(vec![
        cycle_label(BillingCycle::Monthly, "Monthly", cycle),
        Span::raw("   "),
        cycle_label(BillingCycle::Yearly, "Yearly", cycle),
        Span::styled("  Save up to 20%", Styles::success()),
    ]);
    f.render_widget(Paragraph::new(switch).alignment(Alignment::Center), chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    for (package, card) in catalog::PACKAGES.iter().zip(cards.iter()) {
        let selected = package.tier == wizard.selected_package();
        render_package_card(f, *card, package, cycle, selected);
    }
}

fn cycle_label(value: BillingCycle, label: &'static str, current: BillingCycle) -> Span<'static> {
    if value == current {
        Span::styled(format!(" {} ", label), Styles::button_active())
    } else {
        Span::styled(format!(" {} ", label), Styles::button_inactive())
    }
}

fn render_package_card(
    f: &mut Frame,
    area: Rect,
    package: &Package,
    cycle: BillingCycle,
    selected: bool,
) {
    let mut lines = Vec::new();
    if package.popular {
        lines.push(Line::from(Span::styled("★ Most Popular", Styles::badge())));
    } else {
        lines.push(Line::from(""));
    }

    let price = package.price_for(cycle);
    let mut price_line = vec![
        Span::styled(format!("${}", price), Styles::price()),
        Span::styled(cycle.price_suffix(), Styles::text_muted()),
    ];
    if cycle == BillingCycle::Yearly && package.monthly_price != price {
        price_line.push(Span::raw(" "));
        price_line.push(Span::styled(format!("${}", package.monthly_price), Styles::price_struck()));
    }
    lines.push(Line::from(price_line));
    lines.push(Line::from(Span::styled(
        format!("{} per employee", package.cost_per_employee),
        Styles::text_secondary(),
    )));
    lines.push(Line::from(""));

    for feature in package.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Colors::SUCCESS)),
            Span::styled(*feature, Styles::text()),
        ]));
    }

    let (border_style, title_style) = if selected {
        (Styles::border_active(), Styles::selected())
    } else {
        (Styles::border_inactive(), Styles::text())
    };

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", package.name), title_style)),
    );
    f.render_widget(card, area);
}
