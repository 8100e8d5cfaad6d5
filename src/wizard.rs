//! Registration wizard state machine
//!
//! The wizard walks through three screens in a fixed order and is the only
//! writer of the registration fields while it is active.
//!
//! # Step Flow
//!
//! ```text
//! Personal (1) <-> Organization (2) <-> Package (3) --submit--> RegistrationPayload
//! ```
//!
//! `next` and `back` clamp at the ends instead of failing, and never skip a
//! step. `submit` is guarded: only the package step can produce a payload.
//! No field is validated before moving on; empty forms are accepted.

use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{self, NATIONALITIES};
use crate::registration::{OrgInfo, PersonalInfo, RegistrationPayload};
use crate::types::{BillingCycle, PackageTier};

/// Steps of the registration wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WizardStep {
    /// Username, phone, nationality and password
    Personal = 1,
    /// Organization name and location
    Organization = 2,
    /// Package and billing cycle
    Package = 3,
}

impl WizardStep {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 3;

    /// The following step, or `None` on the last one
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Organization),
            Self::Organization => Some(Self::Package),
            Self::Package => None,
        }
    }

    /// The preceding step, or `None` on the first one
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Organization => Some(Self::Personal),
            Self::Package => Some(Self::Organization),
        }
    }

    /// Step number (1-indexed for display)
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Organization => "Organization",
            Self::Package => "Select Package",
        }
    }

    /// Whether `submit` is allowed from this step
    pub const fn can_submit(self) -> bool {
        matches!(self, Self::Package)
    }

    /// All steps in order
    pub const fn all() -> &'static [Self] {
        &[Self::Personal, Self::Organization, Self::Package]
    }

    /// Editable text fields shown on this step, in focus order
    pub const fn fields(self) -> &'static [WizardField] {
        match self {
            Self::Personal => &[
                WizardField::Username,
                WizardField::Phone,
                WizardField::Nationality,
                WizardField::Password,
                WizardField::ConfirmPassword,
            ],
            Self::Organization => &[WizardField::OrgName, WizardField::OrgLocation],
            Self::Package => &[],
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A form field on the first two steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardField {
    Username,
    Phone,
    /// Picked from [`NATIONALITIES`] rather than typed
    Nationality,
    Password,
    ConfirmPassword,
    OrgName,
    OrgLocation,
}

impl WizardField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Phone => "Phone",
            Self::Nationality => "Nationality",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::OrgName => "Organization Name",
            Self::OrgLocation => "Location",
        }
    }

    /// Whether the value is masked on screen
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Whether the value is chosen from a list instead of typed
    pub const fn is_selection(self) -> bool {
        matches!(self, Self::Nationality)
    }
}

/// Errors from guarded wizard transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardTransitionError {
    /// Submit was requested before reaching the package step
    #[error("Cannot submit from step {step} (registration is submitted from {})", WizardStep::Package)]
    SubmitBeforeFinalStep { step: WizardStep },
}

/// In-progress registration.
///
/// # Example
///
/// ```
/// use dwamee::wizard::{RegistrationWizard, WizardStep};
///
/// let mut wizard = RegistrationWizard::new();
/// assert!(wizard.submit().is_err());
///
/// wizard.next();
/// wizard.next();
/// assert_eq!(wizard.step(), WizardStep::Package);
///
/// let payload = wizard.submit().unwrap();
/// assert_eq!(payload.selected_package, "starter");
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationWizard {
    step: WizardStep,
    personal: PersonalInfo,
    org: OrgInfo,
    selected_package: PackageTier,
    billing_cycle: BillingCycle,
    /// Index into the current step's fields
    focus: usize,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    /// Start an empty registration on the first step
    pub fn new() -> Self {
        Self {
            step: WizardStep::Personal,
            personal: PersonalInfo::default(),
            org: OrgInfo::default(),
            selected_package: PackageTier::Starter,
            billing_cycle: BillingCycle::Monthly,
            focus: 0,
        }
    }

    #[inline]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn org(&self) -> &OrgInfo {
        &self.org
    }

    pub fn selected_package(&self) -> PackageTier {
        self.selected_package
    }

    pub fn billing_cycle(&self) -> BillingCycle {
        self.billing_cycle
    }

    /// Advance one step; stays put on the last step
    pub fn next(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            debug!("Wizard step {} -> {}", self.step.number(), next.number());
            self.step = next;
            self.focus = 0;
        }
        self.step
    }

    /// Go back one step; stays put on the first step
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            debug!("Wizard step {} -> {}", self.step.number(), previous.number());
            self.step = previous;
            self.focus = 0;
        }
        self.step
    }

    /// Package the collected data for the checkout.
    ///
    /// Only allowed on the package step. The wizard itself is left untouched;
    /// the caller decides where the payload goes.
    pub fn submit(&self) -> Result<RegistrationPayload, WizardTransitionError> {
        if !self.step.can_submit() {
            return Err(WizardTransitionError::SubmitBeforeFinalStep { step: self.step });
        }

        info!(
            "Registration submitted: package={}, billing={}",
            self.selected_package, self.billing_cycle
        );
        Ok(RegistrationPayload {
            personal: self.personal.clone(),
            org: self.org.clone(),
            selected_package: self.selected_package.id().to_string(),
            billing_cycle: self.billing_cycle,
        })
    }

    // ------------------------------------------------------------------------
    // Field editing
    // ------------------------------------------------------------------------

    /// Field that currently has focus, if the step has any
    pub fn focused_field(&self) -> Option<WizardField> {
        self.step.fields().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let count = self.step.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.step.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    pub fn value(&self, field: WizardField) -> &str {
        match field {
            WizardField::Username => &self.personal.username,
            WizardField::Phone => &self.personal.phone,
            WizardField::Nationality => &self.personal.nationality,
            WizardField::Password => &self.personal.password,
            WizardField::ConfirmPassword => &self.personal.confirm_password,
            WizardField::OrgName => &self.org.name,
            WizardField::OrgLocation => &self.org.location,
        }
    }

    fn value_mut(&mut self, field: WizardField) -> &mut String {
        match field {
            WizardField::Username => &mut self.personal.username,
            WizardField::Phone => &mut self.personal.phone,
            WizardField::Nationality => &mut self.personal.nationality,
            WizardField::Password => &mut self.personal.password,
            WizardField::ConfirmPassword => &mut self.personal.confirm_password,
            WizardField::OrgName => &mut self.org.name,
            WizardField::OrgLocation => &mut self.org.location,
        }
    }

    /// Replace a field's value
    pub fn set_value(&mut self, field: WizardField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Type a character into the focused field (ignored on selection fields)
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            if !field.is_selection() {
                self.value_mut(field).push(c);
            }
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            if field.is_selection() {
                self.personal.nationality.clear();
            } else {
                self.value_mut(field).pop();
            }
        }
    }

    /// Step through the nationality list, wrapping at either end
    pub fn cycle_nationality(&mut self, forward: bool) {
        let count = NATIONALITIES.len();
        let current = NATIONALITIES
            .iter()
            .position(|n| *n == self.personal.nationality);
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.personal.nationality = NATIONALITIES[index].to_string();
    }

    // ------------------------------------------------------------------------
    // Package step
    // ------------------------------------------------------------------------

    pub fn select_package(&mut self, tier: PackageTier) {
        self.selected_package = tier;
    }

    /// Move the package highlight, clamped to the catalog
    pub fn select_adjacent_package(&mut self, forward: bool) {
        let packages = catalog::PACKAGES;
        let index = self.selected_package as usize;
        let index = if forward {
            (index + 1).min(packages.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        self.selected_package = packages[index].tier;
    }

    pub fn set_billing_cycle(&mut self, cycle: BillingCycle) {
        self.billing_cycle = cycle;
    }

    pub fn toggle_billing_cycle(&mut self) {
        self.billing_cycle = self.billing_cycle.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wizard_starts_on_personal_step() {
        let wizard = RegistrationWizard::new();
        assert_eq!(wizard.step(), WizardStep::Personal);
        assert_eq!(wizard.selected_package(), PackageTier::Starter);
        assert_eq!(wizard.billing_cycle(), BillingCycle::Monthly);
        assert_eq!(wizard.focused_field(), Some(WizardField::Username));
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::all().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(WizardStep::all().len(), WizardStep::TOTAL_STEPS);
    }

    #[test]
    fn test_focus_wraps_within_step() {
        let mut wizard = RegistrationWizard::new();
        wizard.focus_previous();
        assert_eq!(wizard.focused_field(), Some(WizardField::ConfirmPassword));
        wizard.focus_next();
        assert_eq!(wizard.focused_field(), Some(WizardField::Username));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut wizard = RegistrationWizard::new();
        for c in "sara".chars() {
            wizard.input_char(c);
        }
        wizard.backspace();
        assert_eq!(wizard.personal().username, "sar");
    }

    #[test]
    fn test_nationality_is_selected_not_typed() {
        let mut wizard = RegistrationWizard::new();
        wizard.focus_next();
        wizard.focus_next();
        assert_eq!(wizard.focused_field(), Some(WizardField::Nationality));

        wizard.input_char('x');
        assert!(wizard.personal().nationality.is_empty());

        wizard.cycle_nationality(true);
        assert_eq!(wizard.personal().nationality, "Egyptian");
        wizard.cycle_nationality(false);
        assert_eq!(wizard.personal().nationality, "Other");
    }

    #[test]
    fn test_package_step_has_no_text_fields() {
        let mut wizard = RegistrationWizard::new();
        wizard.next();
        wizard.next();
        assert_eq!(wizard.focused_field(), None);
        wizard.input_char('a');
        wizard.focus_next();
        assert_eq!(wizard.focused_field(), None);
    }

    #[test]
    fn test_select_adjacent_package_clamps() {
        let mut wizard = RegistrationWizard::new();
        wizard.select_adjacent_package(false);
        assert_eq!(wizard.selected_package(), PackageTier::Starter);
        wizard.select_adjacent_package(true);
        wizard.select_adjacent_package(true);
        wizard.select_adjacent_package(true);
        assert_eq!(wizard.selected_package(), PackageTier::Enterprise);
    }
}
