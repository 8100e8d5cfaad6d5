//! Dwamee - Main entry point
//!
//! Interactive commands run the terminal UI; `quote`, `catalog` and
//! `dashboard` print to stdout and exit.

use anyhow::Result;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use tracing::{debug, info};

use dwamee::app::{App, AppMode};
use dwamee::catalog::{self, ADDON_SERVICES, PACKAGES};
use dwamee::checkout::{self, Quote};
use dwamee::cli::{Cli, Commands};
use dwamee::dashboard::{self, DailyReportFilter, DashboardFilter, ViewTable};
use dwamee::error::DwameeError;
use dwamee::logging::{self, LogTarget};
use dwamee::registration::RegistrationPayload;
use dwamee::store::RegistrationStore;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.command.unwrap_or(Commands::Register);

    let interactive = matches!(command, Commands::Register | Commands::Checkout);
    logging::init_tracing(LogTarget::select(cli.log_file.as_deref(), interactive))?;
    info!("Dwamee starting up");

    match command {
        Commands::Register => {
            info!("Launching registration wizard");
            run_tui(AppMode::Register)?;
        }
        Commands::Checkout => {
            info!("Launching checkout with the demo registration");
            run_tui(AppMode::Checkout)?;
        }
        Commands::Quote {
            package,
            billing,
            addons,
            coupon,
            json,
        } => {
            let payload = RegistrationPayload {
                selected_package: package,
                billing_cycle: billing,
                ..RegistrationPayload::default()
            };
            let quote = checkout::compute_total(&payload, &addons, &coupon);
            debug!("Computed quote {:?}", quote);
            if json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print_quote(&payload, &quote);
            }
        }
        Commands::Catalog => print_catalog(),
        Commands::Dashboard {
            view,
            search,
            from,
            to,
            date,
            entry_type,
        } => {
            let filter = DashboardFilter {
                search: search.clone(),
                start_date: from,
                end_date: to,
            };
            let report_filter = DailyReportFilter {
                search,
                date,
                entry_type,
            };
            info!("Listing dashboard view {}", view);
            print_table(&dashboard::view_table(view, &filter, &report_filter));
        }
    }

    Ok(())
}

/// Run the terminal UI
fn run_tui(mode: AppMode) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| DwameeError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| DwameeError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| DwameeError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(RegistrationStore::new(), mode);
    let result = app.run(&mut terminal);

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;
    Ok(())
}

fn print_quote(payload: &RegistrationPayload, quote: &Quote) {
    let package = catalog::resolve_package(&payload.selected_package);
    println!("Package:        {} ({})", package.name, payload.billing_cycle);
    println!("Package price:  ${}", quote.base_price);
    println!("Add-ons:        ${}", quote.addons_total);
    println!("Subtotal:       ${}", quote.subtotal);
    if quote.discount_percent > 0 {
        println!(
            "Discount ({}%):  -${}",
            quote.discount_percent, quote.discount_amount
        );
    }
    println!("Total:          ${}", quote.total);
}

fn print_catalog() {
    println!("Packages");
    for package in PACKAGES {
        let badge = if package.popular { "  [Most Popular]" } else { "" };
        println!(
            "  {:<14} {:<14} ${}/mo monthly, ${}/mo yearly, up to {} employees{}",
            package.id(),
            package.name,
            package.monthly_price,
            package.yearly_price,
            package.employee_limit,
            badge
        );
        for feature in package.features {
            println!("      - {}", feature);
        }
    }

    println!();
    println!("Add-on services");
    for addon in ADDON_SERVICES {
        let price = match addon.discount_price {
            Some(discounted) => format!("${} (was ${})", discounted, addon.price),
            None => format!("${}", addon.price),
        };
        println!("  {:<14} {:<24} {:<16} {}", addon.id, addon.name, price, addon.description);
    }
}

fn print_table(table: &ViewTable) {
    let widths = table.column_widths();
    println!("{}", format_row(table.headers.iter().copied(), &widths));
    for row in &table.rows {
        println!("{}", format_row(row.iter().map(String::as_str), &widths));
    }
    if let Some(footer) = &table.footer {
        println!();
        println!("{}", footer);
    }
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
