//! Tabular rendering of the dashboard views
//!
//! Both the terminal screens and the headless `dashboard` command print the
//! same columns, so the row formatting lives here.

use super::{
    DailyReportFilter, DashboardFilter, DashboardView, assignments, branches, daily_report, fields,
    groups, places, salary_sheets, summarize_daily_report,
};

/// Header, string cells and an optional totals line for one view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTable {
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
    pub footer: Option<String>,
}

impl ViewTable {
    fn new(headers: &'static [&'static str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            footer: None,
        }
    }

    /// Widest cell (or header) of every column
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Build the filtered table for a view.
///
/// The list views use `filter`; the daily report uses `report_filter`.
pub fn view_table(
    view: DashboardView,
    filter: &DashboardFilter,
    report_filter: &DailyReportFilter,
) -> ViewTable {
    match view {
        DashboardView::Branches => ViewTable::new(
            &["#", "Branch", "Created"],
            filter
                .apply_dated(branches())
                .into_iter()
                .map(|b| vec![b.id.to_string(), b.name.to_string(), b.created_at.to_string()])
                .collect(),
        ),
        DashboardView::Groups => ViewTable::new(
            &["#", "Group", "Places", "Branch"],
            filter
                .apply(groups())
                .into_iter()
                .map(|g| {
                    vec![
                        g.id.to_string(),
                        g.name.to_string(),
                        g.places.join(", "),
                        g.branch.to_string(),
                    ]
                })
                .collect(),
        ),
        DashboardView::Places => ViewTable::new(
            &["#", "Place", "Type", "Attendance", "Boundary"],
            filter
                .apply(places())
                .into_iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        p.name.to_string(),
                        p.location_type.to_string(),
                        p.attendance_type.to_string(),
                        p.boundary(),
                    ]
                })
                .collect(),
        ),
        DashboardView::Fields => ViewTable::new(
            &["#", "Field", "Groups", "Note", "Created"],
            filter
                .apply_dated(fields())
                .into_iter()
                .map(|fd| {
                    vec![
                        fd.id.to_string(),
                        fd.name.to_string(),
                        fd.groups.join(", "),
                        fd.note.to_string(),
                        fd.created_at.to_string(),
                    ]
                })
                .collect(),
        ),
        DashboardView::Assignments => ViewTable::new(
            &["#", "Employee", "Phone", "Fields"],
            filter
                .apply(assignments())
                .into_iter()
                .map(|a| {
                    vec![
                        a.id.to_string(),
                        a.name.to_string(),
                        a.phone.to_string(),
                        a.fields.join(", "),
                    ]
                })
                .collect(),
        ),
        DashboardView::DailyReport => {
            let rows = report_filter.apply(daily_report());
            let summary = summarize_daily_report(&rows);
            let mut table = ViewTable::new(
                &["Employee", "Date", "In", "Out", "Status", "Type", "Amount", "Reason"],
                rows.into_iter()
                    .map(|r| {
                        vec![
                            r.name.to_string(),
                            r.date.to_string(),
                            r.check_in.unwrap_or("-").to_string(),
                            r.check_out.unwrap_or("-").to_string(),
                            r.status.to_string(),
                            r.entry_type.to_string(),
                            r.amount.to_string(),
                            r.reason.to_string(),
                        ]
                    })
                    .collect(),
            );
            table.footer = Some(format!(
                "Total bonuses: {}  Total deductions: {}",
                summary.total_bonus, summary.total_deduction
            ));
            table
        }
        DashboardView::Salaries => ViewTable::new(
            &["#", "Employee", "Basic", "Bonuses", "Deductions", "Net"],
            filter
                .apply(salary_sheets())
                .into_iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.name.to_string(),
                        s.basic_salary.to_string(),
                        s.total_bonuses().to_string(),
                        s.total_deductions().to_string(),
                        s.net().to_string(),
                    ]
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_has_one_cell_per_header() {
        use strum::IntoEnumIterator;
        for view in DashboardView::iter() {
            let table = view_table(view, &DashboardFilter::default(), &DailyReportFilter::default());
            assert!(!table.rows.is_empty(), "{} has no rows", view);
            for row in &table.rows {
                assert_eq!(row.len(), table.headers.len());
            }
        }
    }

    #[test]
    fn test_daily_report_footer_carries_totals() {
        let table = view_table(
            DashboardView::DailyReport,
            &DashboardFilter::default(),
            &DailyReportFilter::default(),
        );
        assert_eq!(
            table.footer.as_deref(),
            Some("Total bonuses: 180  Total deductions: 555")
        );
    }

    #[test]
    fn test_column_widths_cover_headers() {
        let table = view_table(
            DashboardView::Branches,
            &DashboardFilter::search("no such branch"),
            &DailyReportFilter::default(),
        );
        assert!(table.rows.is_empty());
        assert_eq!(table.column_widths(), vec![1, 6, 7]);
    }
}
