//! Application state definitions
//!
//! Contains the state types of the terminal application: the current mode,
//! the screen states for registration, checkout and the dashboard, and the
//! status line.

use crate::checkout::CheckoutSession;
use crate::dashboard::{self, DailyReportFilter, DashboardFilter, DashboardView, ViewTable};
use crate::types::EntryTypeFilter;
use crate::wizard::RegistrationWizard;
use strum::IntoEnumIterator;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Registration wizard (personal info, organization, package)
    Register,
    /// Add-ons, coupon and order summary
    Checkout,
    /// Mock administrative dashboard
    Dashboard,
}

impl AppMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Register => "Create Account",
            Self::Checkout => "Checkout",
            Self::Dashboard => "Dashboard",
        }
    }
}

/// Which part of the checkout screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutFocus {
    #[default]
    Addons,
    Coupon,
    Confirm,
}

impl CheckoutFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Addons => Self::Coupon,
            Self::Coupon => Self::Confirm,
            Self::Confirm => Self::Addons,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Addons => Self::Confirm,
            Self::Coupon => Self::Addons,
            Self::Confirm => Self::Coupon,
        }
    }
}

/// Dashboard screen state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub view: DashboardView,
    pub filter: DashboardFilter,
    /// Entry-type filter of the daily report
    pub entry_type: EntryTypeFilter,
    /// First visible row
    pub scroll: usize,
}

impl DashboardState {
    /// Open the dashboard on a given view with no filters
    pub fn on(view: DashboardView) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Filters of the daily report, derived from the shared search box
    pub fn report_filter(&self) -> DailyReportFilter {
        DailyReportFilter {
            search: self.filter.search.clone(),
            date: None,
            entry_type: self.entry_type,
        }
    }

    /// Filtered table of the current view
    pub fn table(&self) -> ViewTable {
        dashboard::view_table(self.view, &self.filter, &self.report_filter())
    }

    /// Number of rows the current view shows after filtering
    pub fn row_count(&self) -> usize {
        self.table().rows.len()
    }

    /// Switch to the next (or previous) view, wrapping around
    pub fn cycle_view(&mut self, forward: bool) {
        let views: Vec<DashboardView> = DashboardView::iter().collect();
        let index = views.iter().position(|v| *v == self.view).unwrap_or(0);
        let index = if forward {
            (index + 1) % views.len()
        } else {
            (index + views.len() - 1) % views.len()
        };
        self.view = views[index];
        self.scroll = 0;
    }

    pub fn cycle_entry_type(&mut self) {
        self.entry_type = match self.entry_type {
            EntryTypeFilter::All => EntryTypeFilter::Bonus,
            EntryTypeFilter::Bonus => EntryTypeFilter::Deduction,
            EntryTypeFilter::Deduction => EntryTypeFilter::All,
        };
        self.scroll = 0;
    }

    pub fn push_search(&mut self, c: char) {
        self.filter.search.push(c);
        self.scroll = 0;
    }

    pub fn pop_search(&mut self) {
        self.filter.search.pop();
        self.scroll = 0;
    }

    pub fn clear_search(&mut self) {
        self.filter.search.clear();
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.row_count() {
            self.scroll += 1;
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Registration in progress
    pub wizard: RegistrationWizard,
    /// Active checkout, created when the checkout screen opens
    pub checkout: Option<CheckoutSession>,
    pub checkout_focus: CheckoutFocus,
    pub dashboard: DashboardState,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Register,
            wizard: RegistrationWizard::new(),
            checkout: None,
            checkout_focus: CheckoutFocus::default(),
            dashboard: DashboardState::default(),
            status_message: "Welcome to Dwamee".to_string(),
            help_visible: false,
        }
    }
}
