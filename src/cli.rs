use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::dashboard::{self, DashboardView};
use crate::types::{BillingCycle, EntryTypeFilter};

/// Dwamee - workforce attendance sign-up and checkout
#[derive(Parser)]
#[command(name = "dwamee")]
#[command(about = "Sign up for Dwamee, pick a package and check out from the terminal")]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (the terminal UI owns stdout while running)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the registration wizard, then checkout and the dashboard
    Register,
    /// Open the checkout directly with the demo account
    Checkout,
    /// Price a package without opening the terminal UI
    Quote {
        /// Package id (starter, professional, enterprise)
        #[arg(short, long)]
        package: String,
        /// Billing cycle
        #[arg(short, long, default_value = "monthly")]
        billing: BillingCycle,
        /// Add-on service id (repeatable)
        #[arg(short, long = "addon")]
        addons: Vec<String>,
        /// Coupon code
        #[arg(short, long, default_value = "")]
        coupon: String,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// List packages and add-on services
    Catalog,
    /// List one of the dashboard screens
    Dashboard {
        /// Screen to list
        view: DashboardView,
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,
        /// Earliest creation date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<String>,
        /// Latest creation date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<String>,
        /// Exact report date (YYYY-MM-DD, daily report only)
        #[arg(long, value_parser = parse_iso_date)]
        date: Option<String>,
        /// Entry type filter (daily report only)
        #[arg(long, default_value = "all")]
        entry_type: EntryTypeFilter,
    },
}

fn parse_iso_date(value: &str) -> Result<String, String> {
    if dashboard::is_iso_date(value) {
        Ok(value.to_string())
    } else {
        Err(format!("'{}' is not a YYYY-MM-DD date", value))
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(["dwamee"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_cli_checkout() {
        let cli = Cli::try_parse_from(["dwamee", "checkout"]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::Checkout)));
    }

    #[test]
    fn test_cli_quote_repeated_addons() {
        let cli = Cli::try_parse_from([
            "dwamee",
            "quote",
            "--package",
            "professional",
            "--billing",
            "Yearly",
            "--addon",
            "geofencing",
            "--addon",
            "api",
            "--coupon",
            "DWAMEE20",
        ])
        .expect("parse");
        match cli.command {
            Some(Commands::Quote {
                package,
                billing,
                addons,
                coupon,
                json,
            }) => {
                assert_eq!(package, "professional");
                assert_eq!(billing, BillingCycle::Yearly);
                assert_eq!(addons, vec!["geofencing", "api"]);
                assert_eq!(coupon, "DWAMEE20");
                assert!(!json);
            }
            _ => panic!("Expected quote command"),
        }
    }

    #[test]
    fn test_cli_quote_requires_package() {
        assert!(Cli::try_parse_from(["dwamee", "quote"]).is_err());
    }

    #[test]
    fn test_cli_dashboard_filters() {
        let cli = Cli::try_parse_from([
            "dwamee",
            "dashboard",
            "daily-report",
            "--entry-type",
            "bonus",
            "--date",
            "2025-06-01",
        ])
        .expect("parse");
        match cli.command {
            Some(Commands::Dashboard {
                view,
                entry_type,
                date,
                ..
            }) => {
                assert_eq!(view, DashboardView::DailyReport);
                assert_eq!(entry_type, EntryTypeFilter::Bonus);
                assert_eq!(date.as_deref(), Some("2025-06-01"));
            }
            _ => panic!("Expected dashboard command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        let result = Cli::try_parse_from(["dwamee", "dashboard", "branches", "--from", "June"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_log_file_is_global() {
        let cli = Cli::try_parse_from(["dwamee", "catalog", "--log-file", "dwamee.log"])
            .expect("parse");
        assert_eq!(cli.log_file, Some(PathBuf::from("dwamee.log")));
    }
}
