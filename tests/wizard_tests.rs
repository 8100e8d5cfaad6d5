//! Tests for the Registration Wizard
//!
//! These tests verify:
//! - Step transitions and clamping
//! - Guarded submit
//! - Field editing across steps

use dwamee::error::DwameeError;
use dwamee::types::{BillingCycle, PackageTier};
use dwamee::wizard::{RegistrationWizard, WizardField, WizardStep, WizardTransitionError};

fn filled_wizard() -> RegistrationWizard {
    let mut wizard = RegistrationWizard::new();
    wizard.set_value(WizardField::Username, "Mona Adel");
    wizard.set_value(WizardField::Phone, "+20 100 000 0000");
    wizard.set_value(WizardField::Nationality, "Egyptian");
    wizard.set_value(WizardField::Password, "secret");
    wizard.set_value(WizardField::ConfirmPassword, "secret");
    wizard.set_value(WizardField::OrgName, "Nile Logistics");
    wizard.set_value(WizardField::OrgLocation, "Alexandria");
    wizard
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_wizard_starts_on_personal_info() {
    let wizard = RegistrationWizard::new();
    assert_eq!(wizard.step(), WizardStep::Personal);
    assert_eq!(wizard.step().number(), 1);
    assert_eq!(wizard.selected_package(), PackageTier::Starter);
    assert_eq!(wizard.billing_cycle(), BillingCycle::Monthly);
}

#[test]
fn test_next_and_back_walk_the_steps() {
    let mut wizard = RegistrationWizard::new();
    assert_eq!(wizard.next(), WizardStep::Organization);
    assert_eq!(wizard.next(), WizardStep::Package);
    assert_eq!(wizard.back(), WizardStep::Organization);
    assert_eq!(wizard.back(), WizardStep::Personal);
}

#[test]
fn test_next_on_last_step_stays() {
    let mut wizard = RegistrationWizard::new();
    for _ in 0..5 {
        wizard.next();
    }
    assert_eq!(wizard.step(), WizardStep::Package);
}

#[test]
fn test_back_on_first_step_stays() {
    let mut wizard = RegistrationWizard::new();
    assert_eq!(wizard.back(), WizardStep::Personal);
}

#[test]
fn test_navigation_keeps_entered_data() {
    let mut wizard = filled_wizard();
    wizard.next();
    wizard.next();
    wizard.back();
    wizard.back();
    assert_eq!(wizard.personal().username, "Mona Adel");
    assert_eq!(wizard.org().name, "Nile Logistics");
}

// =============================================================================
// Submit
// =============================================================================

#[test]
fn test_submit_before_package_step_fails() {
    let mut wizard = filled_wizard();
    assert_eq!(
        wizard.submit(),
        Err(WizardTransitionError::SubmitBeforeFinalStep {
            step: WizardStep::Personal
        })
    );
    wizard.next();
    assert!(wizard.submit().is_err());
}

#[test]
fn test_submit_error_converts_to_crate_error() {
    let wizard = RegistrationWizard::new();
    let err: DwameeError = wizard.submit().unwrap_err().into();
    assert!(matches!(err, DwameeError::WizardTransition(_)));
}

#[test]
fn test_submit_builds_payload() {
    let mut wizard = filled_wizard();
    wizard.next();
    wizard.next();
    wizard.select_package(PackageTier::Enterprise);
    wizard.set_billing_cycle(BillingCycle::Yearly);

    let payload = wizard.submit().expect("submit on package step");
    assert_eq!(payload.personal.username, "Mona Adel");
    assert_eq!(payload.personal.nationality, "Egyptian");
    assert_eq!(payload.org.location, "Alexandria");
    assert_eq!(payload.selected_package, "enterprise");
    assert_eq!(payload.billing_cycle, BillingCycle::Yearly);

    // Submit does not consume or reset the wizard
    assert_eq!(wizard.step(), WizardStep::Package);
}

#[test]
fn test_submit_accepts_empty_fields() {
    let mut wizard = RegistrationWizard::new();
    wizard.next();
    wizard.next();
    let payload = wizard.submit().expect("no validation on submit");
    assert!(payload.personal.username.is_empty());
    assert_eq!(payload.selected_package, "starter");
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn test_typing_goes_to_focused_field() {
    let mut wizard = RegistrationWizard::new();
    for c in "ali".chars() {
        wizard.input_char(c);
    }
    wizard.focus_next();
    wizard.input_char('1');
    assert_eq!(wizard.personal().username, "ali");
    assert_eq!(wizard.personal().phone, "1");
}

#[test]
fn test_next_resets_focus_to_first_field() {
    let mut wizard = RegistrationWizard::new();
    wizard.focus_previous();
    assert_eq!(wizard.focused_field(), Some(WizardField::ConfirmPassword));
    wizard.next();
    assert_eq!(wizard.focused_field(), Some(WizardField::OrgName));
}
