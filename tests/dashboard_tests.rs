//! Tests for the Mock Dashboard
//!
//! These tests verify:
//! - Name search and the created-at date range
//! - Daily report filters and totals
//! - Salary net computation

use dwamee::dashboard::{
    self, DailyReportFilter, DashboardFilter, DashboardView, summarize_daily_report,
};
use dwamee::types::EntryTypeFilter;

fn names<T: dashboard::Named>(records: &[&T]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

// =============================================================================
// List filters
// =============================================================================

#[test]
fn test_search_is_case_insensitive_substring() {
    let filter = DashboardFilter::search("BRANCH");
    let found = filter.apply_dated(dashboard::branches());
    assert_eq!(names(&found), vec!["Alexandria Branch", "Mansoura Branch"]);
}

#[test]
fn test_date_range_limits_branches() {
    let filter = DashboardFilter {
        start_date: Some("2025-03-01".to_string()),
        end_date: Some("2025-06-10".to_string()),
        ..DashboardFilter::default()
    };
    let found = filter.apply_dated(dashboard::branches());
    assert_eq!(names(&found), vec!["Alexandria Branch", "Giza Office"]);
}

#[test]
fn test_open_ended_date_range() {
    let filter = DashboardFilter {
        start_date: Some("2025-04-01".to_string()),
        ..DashboardFilter::default()
    };
    let found = filter.apply_dated(dashboard::fields());
    assert_eq!(names(&found), vec!["Downtown Office Block", "Logistics Hub"]);
}

#[test]
fn test_search_and_dates_combine() {
    let filter = DashboardFilter {
        search: "hub".to_string(),
        start_date: Some("2025-01-01".to_string()),
        end_date: Some("2025-05-01".to_string()),
    };
    assert!(filter.apply_dated(dashboard::fields()).is_empty());
}

#[test]
fn test_undated_views_filter_by_name_only() {
    let filter = DashboardFilter {
        search: "team".to_string(),
        start_date: Some("2030-01-01".to_string()),
        end_date: None,
    };
    assert_eq!(filter.apply(dashboard::groups()).len(), 2);
    assert_eq!(filter.apply(dashboard::places()).len(), 0);
}

#[test]
fn test_place_boundaries() {
    let boundaries: Vec<String> = dashboard::places().iter().map(|p| p.boundary()).collect();
    assert_eq!(
        boundaries,
        vec!["Radius: 50m", "Points: 5", "Width: 200m", "Points: 8"]
    );
}

// =============================================================================
// Daily report
// =============================================================================

#[test]
fn test_daily_report_totals_unfiltered() {
    let rows = DailyReportFilter::default().apply(dashboard::daily_report());
    let summary = summarize_daily_report(&rows);
    assert_eq!(summary.rows, 8);
    assert_eq!(summary.total_bonus, 180);
    assert_eq!(summary.total_deduction, 555);
}

#[test]
fn test_daily_report_entry_type_filter() {
    let filter = DailyReportFilter {
        entry_type: EntryTypeFilter::Bonus,
        ..DailyReportFilter::default()
    };
    let rows = filter.apply(dashboard::daily_report());
    let summary = summarize_daily_report(&rows);
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.total_deduction, 0);
}

#[test]
fn test_daily_report_exact_date() {
    let filter = DailyReportFilter {
        date: Some("2026-02-24".to_string()),
        entry_type: EntryTypeFilter::Deduction,
        ..DailyReportFilter::default()
    };
    let rows = filter.apply(dashboard::daily_report());
    let summary = summarize_daily_report(&rows);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.total_deduction, 180);
}

#[test]
fn test_daily_report_absent_row_has_no_times() {
    let filter = DailyReportFilter {
        search: "omar".to_string(),
        ..DailyReportFilter::default()
    };
    let rows = filter.apply(dashboard::daily_report());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].check_in, None);
    assert_eq!(rows[0].check_out, None);
}

// =============================================================================
// Salaries and tables
// =============================================================================

#[test]
fn test_salary_net() {
    let nets: Vec<i64> = dashboard::salary_sheets().iter().map(|s| s.net()).collect();
    assert_eq!(nets, vec![6000, 6325, 4670]);
}

#[test]
fn test_view_table_reflects_filters() {
    let table = dashboard::view_table(
        DashboardView::Assignments,
        &DashboardFilter::search("nour"),
        &DailyReportFilter::default(),
    );
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][1], "Nour Ibrahim");
    assert_eq!(table.rows[0][3], "Logistics Hub, Downtown Office Block");
}
