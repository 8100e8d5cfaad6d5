//! Tests for Checkout Pricing
//!
//! These tests verify:
//! - compute_total against the catalog
//! - Coupon lookup and rounding
//! - CheckoutSession add-on toggling and coupon state

use dwamee::checkout::{self, CheckoutSession, POST_PURCHASE_VIEW};
use dwamee::dashboard::DashboardView;
use dwamee::registration::RegistrationPayload;
use dwamee::types::BillingCycle;

fn payload(package: &str, billing: BillingCycle) -> RegistrationPayload {
    RegistrationPayload {
        selected_package: package.to_string(),
        billing_cycle: billing,
        ..RegistrationPayload::default()
    }
}

const NO_ADDONS: [&str; 0] = [];

// =============================================================================
// compute_total
// =============================================================================

#[test]
fn test_professional_with_two_addons_and_welcome10() {
    let quote = checkout::compute_total(
        &payload("professional", BillingCycle::Monthly),
        ["geofencing", "analytics"],
        "welcome10",
    );
    assert_eq!(quote.base_price, 49);
    assert_eq!(quote.addons_total, 30);
    assert_eq!(quote.subtotal, 79);
    assert_eq!(quote.discount_percent, 10);
    assert_eq!(quote.discount_amount, 8);
    assert_eq!(quote.total, 71);
}

#[test]
fn test_free_starter_with_coupon_is_zero() {
    let quote = checkout::compute_total(&payload("starter", BillingCycle::Monthly), NO_ADDONS, "dwamee20");
    assert_eq!(quote.subtotal, 0);
    assert_eq!(quote.discount_amount, 0);
    assert_eq!(quote.total, 0);
}

#[test]
fn test_discount_rounds_half_up() {
    // 49 + payroll at 18 = 67; 20% of 67 is 13.4
    let quote = checkout::compute_total(
        &payload("professional", BillingCycle::Monthly),
        ["payroll"],
        "dwamee20",
    );
    assert_eq!(quote.subtotal, 67);
    assert_eq!(quote.discount_amount, 13);
    assert_eq!(quote.total, 54);

    assert_eq!(checkout::discount_amount(25, 10), 3);
    assert_eq!(checkout::discount_amount(24, 10), 2);
}

#[test]
fn test_yearly_uses_yearly_price() {
    let quote = checkout::compute_total(&payload("enterprise", BillingCycle::Yearly), NO_ADDONS, "");
    assert_eq!(quote.base_price, 119);
    assert_eq!(quote.total, 119);
}

#[test]
fn test_unknown_package_prices_as_default() {
    let quote = checkout::compute_total(&payload("platinum", BillingCycle::Monthly), NO_ADDONS, "");
    assert_eq!(quote.base_price, 0);
}

#[test]
fn test_unknown_addon_adds_nothing() {
    let quote = checkout::compute_total(
        &payload("professional", BillingCycle::Monthly),
        ["teleportation", "notifications"],
        "",
    );
    assert_eq!(quote.addons_total, 8);
}

#[test]
fn test_coupon_is_case_insensitive() {
    let p = payload("enterprise", BillingCycle::Monthly);
    let lower = checkout::compute_total(&p, NO_ADDONS, "dwamee20");
    let upper = checkout::compute_total(&p, NO_ADDONS, "DWAMEE20");
    let mixed = checkout::compute_total(&p, NO_ADDONS, "DwAmEe20");
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert_eq!(lower.discount_percent, 20);
}

#[test]
fn test_unknown_coupon_takes_nothing_off() {
    let quote = checkout::compute_total(&payload("enterprise", BillingCycle::Monthly), NO_ADDONS, "FREE100");
    assert_eq!(quote.discount_percent, 0);
    assert_eq!(quote.total, 149);
}

// =============================================================================
// CheckoutSession
// =============================================================================

#[test]
fn test_session_toggle_addon_twice_removes_it() {
    let mut session = CheckoutSession::new(RegistrationPayload::demo());
    session.toggle_addon("api");
    assert!(session.is_selected("api"));
    session.toggle_addon("api");
    assert!(!session.is_selected("api"));
    assert_eq!(session.quote().addons_total, 0);
}

#[test]
fn test_session_keeps_toggle_order() {
    let mut session = CheckoutSession::new(RegistrationPayload::demo());
    session.toggle_addon("payroll");
    session.toggle_addon("geofencing");
    assert_eq!(session.selected_addons(), ["payroll", "geofencing"]);
}

#[test]
fn test_session_coupon_counts_only_when_applied() {
    let mut session = CheckoutSession::new(RegistrationPayload::demo());
    session.edit_coupon("dwamee20");
    assert_eq!(session.quote().discount_percent, 0);

    assert!(session.apply_coupon());
    assert_eq!(session.quote().discount_percent, 20);

    session.edit_coupon("dwamee2");
    assert!(!session.coupon_applied());
    assert_eq!(session.quote().discount_percent, 0);
}

#[test]
fn test_session_invalid_coupon_clears_discount() {
    let mut session = CheckoutSession::new(RegistrationPayload::demo());
    session.edit_coupon("welcome10");
    session.apply_coupon();
    session.edit_coupon("nope");
    assert!(!session.apply_coupon());
    assert_eq!(session.coupon_percent(), 0);
}

#[test]
fn test_confirm_goes_to_branches() {
    let session = CheckoutSession::new(RegistrationPayload::demo());
    assert_eq!(session.confirm(), POST_PURCHASE_VIEW);
    assert_eq!(POST_PURCHASE_VIEW, DashboardView::Branches);
}
