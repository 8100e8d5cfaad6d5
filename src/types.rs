//! Type-safe enumerations shared across the sign-up flow and the dashboard
//!
//! Package ids travel through the registration payload as plain strings (so
//! that unknown ids can reach the checkout's resolve-with-default), but every
//! place that knows the catalog works with these enums.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Billing cycle chosen on the package step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Flip between monthly and yearly
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    /// Short suffix used next to a price
    pub fn price_suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/mo",
            Self::Yearly => "/mo (yearly)",
        }
    }
}

/// Subscription package tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PackageTier {
    #[default]
    Starter,
    Professional,
    Enterprise,
}

impl PackageTier {
    /// Catalog id for this tier
    pub fn id(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Kind of entry on the daily attendance report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntryType {
    Bonus,
    Deduction,
}

/// Entry-type filter for the daily report (`all` keeps both kinds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EntryTypeFilter {
    #[default]
    All,
    Bonus,
    Deduction,
}

impl EntryTypeFilter {
    /// Whether an entry of the given kind passes this filter
    pub fn matches(self, entry: EntryType) -> bool {
        match self {
            Self::All => true,
            Self::Bonus => entry == EntryType::Bonus,
            Self::Deduction => entry == EntryType::Deduction,
        }
    }
}

/// Attendance status shown on the daily report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum AttendanceStatus {
    #[strum(serialize = "On Time")]
    OnTime,
    #[strum(serialize = "Late")]
    Late,
    #[strum(serialize = "Absent")]
    Absent,
    #[strum(serialize = "Early Leave")]
    EarlyLeave,
}

/// How a place's boundary is defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LocationType {
    Point,
    Polygon,
    Area,
}

/// What employees record at a place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum AttendanceType {
    #[strum(serialize = "Check In")]
    CheckIn,
    #[strum(serialize = "Check In/Out")]
    CheckInOut,
}
