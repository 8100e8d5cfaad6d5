//! Mock administrative dashboard
//!
//! Read-only datasets shown after checkout, with the client-side filtering the
//! dashboard screens offer. Nothing here talks to a backend.
//!
//! # Module Structure
//! - `records` - Branches, groups, places, fields and assignments
//! - `reports` - Daily attendance report and salary details
//! - `table` - Column layout shared by the screens and the headless listing

mod records;
mod reports;
mod table;

pub use records::{
    Assignment, Branch, Field, Group, Place, assignments, branches, fields, groups, places,
};
pub use reports::{
    DailyReportFilter, DailyReportRow, DailyReportSummary, SalaryItem, SalarySheet, daily_report,
    salary_sheets, summarize_daily_report,
};
pub use table::{ViewTable, view_table};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Screens of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum DashboardView {
    #[default]
    Branches,
    Groups,
    Places,
    Fields,
    Assignments,
    DailyReport,
    Salaries,
}

impl DashboardView {
    pub fn title(self) -> &'static str {
        match self {
            Self::Branches => "Branches",
            Self::Groups => "Groups",
            Self::Places => "Places",
            Self::Fields => "Fields",
            Self::Assignments => "Assignments",
            Self::DailyReport => "Daily Report",
            Self::Salaries => "Salary Details",
        }
    }

    /// Whether the view's rows carry a creation date the range filter applies to
    pub fn has_dates(self) -> bool {
        matches!(self, Self::Branches | Self::Fields)
    }
}

/// A record that can be searched by name
pub trait Named {
    fn name(&self) -> &str;
}

/// A record with an ISO-8601 (`YYYY-MM-DD`) creation date
pub trait Dated {
    fn created_at(&self) -> &str;
}

/// Search box plus optional date range shared by the list screens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    pub search: String,
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub end_date: Option<String>,
}

impl DashboardFilter {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    /// Case-insensitive substring match; an empty search matches everything
    pub fn matches_name(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Whether a date falls inside the range. ISO dates compare correctly as
    /// strings, so no parsing is needed.
    pub fn matches_date(&self, date: &str) -> bool {
        let after_start = self.start_date.as_deref().is_none_or(|start| date >= start);
        let before_end = self.end_date.as_deref().is_none_or(|end| date <= end);
        after_start && before_end
    }

    /// Filter records by name only
    pub fn apply<'a, T: Named>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches_name(r.name())).collect()
    }

    /// Filter records by name and creation date
    pub fn apply_dated<'a, T: Named + Dated>(&self, records: &'a [T]) -> Vec<&'a T> {
        records
            .iter()
            .filter(|r| self.matches_name(r.name()) && self.matches_date(r.created_at()))
            .collect()
    }
}

/// Check that a string looks like `YYYY-MM-DD`
pub fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_parse_kebab_case() {
        assert_eq!("daily-report".parse::<DashboardView>().ok(), Some(DashboardView::DailyReport));
        assert_eq!(DashboardView::DailyReport.to_string(), "daily-report");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = DashboardFilter::default();
        assert!(filter.matches_name("Cairo HQ"));
        assert!(filter.matches_date("1999-01-01"));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = DashboardFilter {
            start_date: Some("2025-03-22".to_string()),
            end_date: Some("2025-06-10".to_string()),
            ..DashboardFilter::default()
        };
        assert!(filter.matches_date("2025-03-22"));
        assert!(filter.matches_date("2025-06-10"));
        assert!(!filter.matches_date("2025-01-15"));
        assert!(!filter.matches_date("2025-09-01"));
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2026-02-25"));
        assert!(!is_iso_date("2026-2-25"));
        assert!(!is_iso_date("2026/02/25"));
        assert!(!is_iso_date("yesterday"));
    }
}
