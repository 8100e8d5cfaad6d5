//! Checkout pricing
//!
//! [`compute_total`] is the pure pricing function: base package price for the
//! billing cycle, plus add-ons, minus a coupon percentage. [`CheckoutSession`]
//! wraps it with the interactive state of the checkout screen (toggled
//! add-ons, the coupon box and whether a coupon is currently applied).
//!
//! Unknown package ids price as the default tier, unknown add-on ids add
//! nothing and unknown coupons take nothing off. None of these are errors.

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::catalog::{self, ADDON_SERVICES};
use crate::dashboard::DashboardView;
use crate::registration::RegistrationPayload;

/// Where the checkout sends the user after confirming, whatever the total
pub const POST_PURCHASE_VIEW: DashboardView = DashboardView::Branches;

/// Derived pricing for one checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub base_price: u32,
    pub addons_total: u32,
    pub subtotal: u32,
    pub discount_percent: u32,
    pub discount_amount: u32,
    pub total: u32,
}

/// Price a registration with the given add-ons and coupon code.
///
/// Add-on ids are treated as a set: listing one twice charges it once.
/// The discount is `round(subtotal * percent / 100)`, rounding halves up.
pub fn compute_total<I, S>(payload: &RegistrationPayload, addon_ids: I, coupon_code: &str) -> Quote
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let percent = catalog::coupon_percent(coupon_code).unwrap_or(0);
    price(payload, addon_ids, percent)
}

/// Sum of effective add-on prices over the distinct ids given
pub fn addons_total<I, S>(addon_ids: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids: BTreeSet<String> = addon_ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect();
    ids.iter().map(|id| catalog::resolve_addon_price(id)).sum()
}

/// Percentage of `subtotal`, rounded half-up to a whole currency unit
pub fn discount_amount(subtotal: u32, percent: u32) -> u32 {
    let scaled = u64::from(subtotal) * u64::from(percent);
    ((scaled + 50) / 100) as u32
}

fn price<I, S>(payload: &RegistrationPayload, addon_ids: I, discount_percent: u32) -> Quote
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let package = catalog::resolve_package(&payload.selected_package);
    let base_price = package.price_for(payload.billing_cycle);
    let addons_total = addons_total(addon_ids);
    let subtotal = base_price + addons_total;
    let discount_amount = discount_amount(subtotal, discount_percent);

    Quote {
        base_price,
        addons_total,
        subtotal,
        discount_percent,
        discount_amount,
        total: subtotal - discount_amount,
    }
}

/// Interactive state of the checkout screen
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    payload: RegistrationPayload,
    /// Selected add-on ids in the order they were toggled on
    selected_addons: Vec<String>,
    coupon_input: String,
    coupon_applied: bool,
    coupon_percent: u32,
    /// Highlighted row in the add-on list
    cursor: usize,
}

impl CheckoutSession {
    pub fn new(payload: RegistrationPayload) -> Self {
        Self {
            payload,
            selected_addons: Vec::new(),
            coupon_input: String::new(),
            coupon_applied: false,
            coupon_percent: 0,
            cursor: 0,
        }
    }

    pub fn payload(&self) -> &RegistrationPayload {
        &self.payload
    }

    pub fn selected_addons(&self) -> &[String] {
        &self.selected_addons
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_addons.iter().any(|a| a == id)
    }

    /// Add the add-on if absent, remove it if present
    pub fn toggle_addon(&mut self, id: &str) {
        if let Some(pos) = self.selected_addons.iter().position(|a| a == id) {
            self.selected_addons.remove(pos);
            debug!("Add-on removed: {}", id);
        } else {
            self.selected_addons.push(id.to_string());
            debug!("Add-on selected: {}", id);
        }
    }

    pub fn coupon_input(&self) -> &str {
        &self.coupon_input
    }

    pub fn coupon_applied(&self) -> bool {
        self.coupon_applied
    }

    pub fn coupon_percent(&self) -> u32 {
        self.coupon_percent
    }

    /// Replace the coupon box contents. Any applied coupon stops applying
    /// until [`apply_coupon`](Self::apply_coupon) is called again.
    pub fn edit_coupon(&mut self, text: impl Into<String>) {
        self.coupon_input = text.into();
        self.coupon_applied = false;
    }

    pub fn push_coupon_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.coupon_input);
        text.push(c);
        self.edit_coupon(text);
    }

    pub fn pop_coupon_char(&mut self) {
        let mut text = std::mem::take(&mut self.coupon_input);
        text.pop();
        self.edit_coupon(text);
    }

    /// Look up the coupon box contents; invalid codes clear any discount
    pub fn apply_coupon(&mut self) -> bool {
        match catalog::coupon_percent(&self.coupon_input) {
            Some(percent) => {
                info!("Coupon {:?} applied: {}% off", self.coupon_input, percent);
                self.coupon_applied = true;
                self.coupon_percent = percent;
            }
            None => {
                debug!("Coupon {:?} not recognised", self.coupon_input);
                self.coupon_applied = false;
                self.coupon_percent = 0;
            }
        }
        self.coupon_applied
    }

    /// Current pricing; the coupon only counts while applied
    pub fn quote(&self) -> Quote {
        let percent = if self.coupon_applied { self.coupon_percent } else { 0 };
        price(&self.payload, &self.selected_addons, percent)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < ADDON_SERVICES.len() {
            self.cursor += 1;
        }
    }

    /// Toggle the highlighted add-on
    pub fn toggle_current(&mut self) {
        if let Some(service) = ADDON_SERVICES.get(self.cursor) {
            self.toggle_addon(service.id);
        }
    }

    /// Finish the checkout. No payment is taken; the destination is fixed.
    pub fn confirm(&self) -> DashboardView {
        info!(
            "Checkout confirmed: total={} ({} add-ons)",
            self.quote().total,
            self.selected_addons.len()
        );
        POST_PURCHASE_VIEW
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BillingCycle;

    fn payload(package: &str, cycle: BillingCycle) -> RegistrationPayload {
        RegistrationPayload {
            selected_package: package.to_string(),
            billing_cycle: cycle,
            ..RegistrationPayload::demo()
        }
    }

    #[test]
    fn test_discount_amount_rounds_half_up() {
        assert_eq!(discount_amount(67, 20), 13);
        assert_eq!(discount_amount(79, 10), 8);
        assert_eq!(discount_amount(25, 10), 3);
        assert_eq!(discount_amount(0, 20), 0);
    }

    #[test]
    fn test_duplicate_addons_count_once() {
        let quote = compute_total(
            &payload("starter", BillingCycle::Monthly),
            ["api", "api"],
            "",
        );
        assert_eq!(quote.addons_total, 30);
    }

    #[test]
    fn test_yearly_base_price() {
        let quote = compute_total(&payload("enterprise", BillingCycle::Yearly), [""; 0], "");
        assert_eq!(quote.base_price, 119);
        assert_eq!(quote.total, 119);
    }

    #[test]
    fn test_cursor_stays_in_catalog() {
        let mut session = CheckoutSession::new(RegistrationPayload::demo());
        session.cursor_up();
        assert_eq!(session.cursor(), 0);
        for _ in 0..20 {
            session.cursor_down();
        }
        assert_eq!(session.cursor(), ADDON_SERVICES.len() - 1);
        session.toggle_current();
        assert!(session.is_selected("api"));
    }

    #[test]
    fn test_typing_clears_applied_coupon() {
        let mut session = CheckoutSession::new(RegistrationPayload::demo());
        for c in "welcome10".chars() {
            session.push_coupon_char(c);
        }
        assert!(session.apply_coupon());
        session.pop_coupon_char();
        assert!(!session.coupon_applied());
        assert_eq!(session.quote().discount_amount, 0);
    }
}
