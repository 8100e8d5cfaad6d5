//! Attendance report and salary views

use serde::Serialize;

use super::Named;
use crate::types::{AttendanceStatus, EntryType, EntryTypeFilter};

/// One employee's attendance on one day, with the bonus or deduction it earned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReportRow {
    pub id: u32,
    pub name: &'static str,
    pub date: &'static str,
    /// `None` when the employee never checked in
    pub check_in: Option<&'static str>,
    pub check_out: Option<&'static str>,
    pub status: AttendanceStatus,
    pub entry_type: EntryType,
    pub amount: u32,
    pub reason: &'static str,
}

impl Named for DailyReportRow {
    fn name(&self) -> &str {
        self.name
    }
}

/// Filters of the daily report screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReportFilter {
    pub search: String,
    /// Exact date, `YYYY-MM-DD`
    pub date: Option<String>,
    pub entry_type: EntryTypeFilter,
}

impl DailyReportFilter {
    pub fn matches(&self, row: &DailyReportRow) -> bool {
        let name = row.name.to_lowercase().contains(&self.search.to_lowercase());
        let date = self.date.as_deref().is_none_or(|d| row.date == d);
        name && date && self.entry_type.matches(row.entry_type)
    }

    pub fn apply<'a>(&self, rows: &'a [DailyReportRow]) -> Vec<&'a DailyReportRow> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Totals over a filtered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyReportSummary {
    pub total_bonus: u32,
    pub total_deduction: u32,
    pub rows: usize,
}

pub fn summarize_daily_report(rows: &[&DailyReportRow]) -> DailyReportSummary {
    rows.iter().fold(
        DailyReportSummary { rows: rows.len(), ..DailyReportSummary::default() },
        |mut acc, row| {
            match row.entry_type {
                EntryType::Bonus => acc.total_bonus += row.amount,
                EntryType::Deduction => acc.total_deduction += row.amount,
            }
            acc
        },
    )
}

/// A dated line on a salary sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryItem {
    pub date: &'static str,
    pub explanation: &'static str,
    pub amount: u32,
}

/// One employee's month: basic salary plus bonuses minus deductions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySheet {
    pub id: u32,
    pub name: &'static str,
    pub basic_salary: u32,
    pub bonuses: &'static [SalaryItem],
    pub deductions: &'static [SalaryItem],
}

impl SalarySheet {
    pub fn total_bonuses(&self) -> u32 {
        self.bonuses.iter().map(|b| b.amount).sum()
    }

    pub fn total_deductions(&self) -> u32 {
        self.deductions.iter().map(|d| d.amount).sum()
    }

    /// Net pay; negative if deductions exceed salary and bonuses
    pub fn net(&self) -> i64 {
        i64::from(self.basic_salary) + i64::from(self.total_bonuses())
            - i64::from(self.total_deductions())
    }
}

impl Named for SalarySheet {
    fn name(&self) -> &str {
        self.name
    }
}

const DAILY_REPORT: &[DailyReportRow] = &[
    DailyReportRow {
        id: 1,
        name: "Ahmed Hassan",
        date: "2026-02-25",
        check_in: Some("08:02"),
        check_out: Some("17:00"),
        status: AttendanceStatus::OnTime,
        entry_type: EntryType::Bonus,
        amount: 50,
        reason: "Early check-in incentive",
    },
    DailyReportRow {
        id: 2,
        name: "Sara Mohamed",
        date: "2026-02-25",
        check_in: Some("08:35"),
        check_out: Some("17:00"),
        status: AttendanceStatus::Late,
        entry_type: EntryType::Deduction,
        amount: 75,
        reason: "Late arrival (35 min)",
    },
    DailyReportRow {
        id: 3,
        name: "Omar Ali",
        date: "2026-02-25",
        check_in: None,
        check_out: None,
        status: AttendanceStatus::Absent,
        entry_type: EntryType::Deduction,
        amount: 200,
        reason: "Absent without notice",
    },
    DailyReportRow {
        id: 4,
        name: "Nour Ibrahim",
        date: "2026-02-25",
        check_in: Some("07:55"),
        check_out: Some("15:30"),
        status: AttendanceStatus::EarlyLeave,
        entry_type: EntryType::Deduction,
        amount: 100,
        reason: "Early leave (1.5h)",
    },
    DailyReportRow {
        id: 5,
        name: "Youssef Kamal",
        date: "2026-02-25",
        check_in: Some("08:00"),
        check_out: Some("18:30"),
        status: AttendanceStatus::OnTime,
        entry_type: EntryType::Bonus,
        amount: 80,
        reason: "Overtime (1.5h)",
    },
    DailyReportRow {
        id: 6,
        name: "Layla Fahmy",
        date: "2026-02-24",
        check_in: Some("08:10"),
        check_out: Some("17:00"),
        status: AttendanceStatus::Late,
        entry_type: EntryType::Deduction,
        amount: 30,
        reason: "Late arrival (10 min)",
    },
    DailyReportRow {
        id: 7,
        name: "Hassan Mahmoud",
        date: "2026-02-24",
        check_in: Some("08:00"),
        check_out: Some("17:00"),
        status: AttendanceStatus::OnTime,
        entry_type: EntryType::Bonus,
        amount: 50,
        reason: "Perfect attendance",
    },
    DailyReportRow {
        id: 8,
        name: "Dina Samir",
        date: "2026-02-24",
        check_in: Some("09:15"),
        check_out: Some("17:00"),
        status: AttendanceStatus::Late,
        entry_type: EntryType::Deduction,
        amount: 150,
        reason: "Late arrival (1h 15m)",
    },
];

const SALARY_SHEETS: &[SalarySheet] = &[
    SalarySheet {
        id: 1,
        name: "Ahmed Hassan",
        basic_salary: 5500,
        bonuses: &[
            SalaryItem { date: "2026-01-05", explanation: "Perfect attendance bonus", amount: 200 },
            SalaryItem {
                date: "2026-01-20",
                explanation: "Project completion incentive",
                amount: 350,
            },
        ],
        deductions: &[SalaryItem {
            date: "2026-01-08",
            explanation: "Late arrival (15 min)",
            amount: 50,
        }],
    },
    SalarySheet {
        id: 2,
        name: "Sara Mohamed",
        basic_salary: 6200,
        bonuses: &[SalaryItem { date: "2026-01-15", explanation: "Overtime hours (8h)", amount: 400 }],
        deductions: &[
            SalaryItem { date: "2026-01-03", explanation: "Early leave (1h)", amount: 75 },
            SalaryItem { date: "2026-01-12", explanation: "Absent without notice", amount: 200 },
        ],
    },
    SalarySheet {
        id: 3,
        name: "Omar Ali",
        basic_salary: 4800,
        bonuses: &[],
        deductions: &[
            SalaryItem { date: "2026-01-10", explanation: "Late arrival (30 min)", amount: 100 },
            SalaryItem { date: "2026-01-22", explanation: "Late arrival (10 min)", amount: 30 },
        ],
    },
];

pub fn daily_report() -> &'static [DailyReportRow] {
    DAILY_REPORT
}

pub fn salary_sheets() -> &'static [SalarySheet] {
    SALARY_SHEETS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_net() {
        assert_eq!(SALARY_SHEETS[0].net(), 5500 + 550 - 50);
        assert_eq!(SALARY_SHEETS[2].total_bonuses(), 0);
        assert_eq!(SALARY_SHEETS[2].net(), 4800 - 130);
    }

    #[test]
    fn test_summary_of_unfiltered_report() {
        let rows: Vec<&DailyReportRow> = DAILY_REPORT.iter().collect();
        let summary = summarize_daily_report(&rows);
        assert_eq!(summary.rows, 8);
        assert_eq!(summary.total_bonus, 180);
        assert_eq!(summary.total_deduction, 555);
    }
}
