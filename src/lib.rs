//! Dwamee Library
//!
//! Sign-up flow for the Dwamee attendance service: a three-step registration
//! wizard, checkout pricing with add-ons and coupons, a registration store
//! and a read-only mock dashboard, plus the terminal UI that drives them.

pub mod app;
pub mod catalog;
pub mod checkout;
pub mod cli;
pub mod components;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod registration;
pub mod store;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use catalog::{AddonService, Package};
pub use checkout::{CheckoutSession, Quote, compute_total};
pub use dashboard::{DashboardFilter, DashboardView};
pub use error::DwameeError;
pub use registration::{OrgInfo, PersonalInfo, RegistrationPayload};
pub use store::{RegistrationState, RegistrationStore};
pub use types::{BillingCycle, EntryType, EntryTypeFilter, PackageTier};
pub use wizard::{RegistrationWizard, WizardField, WizardStep, WizardTransitionError};
