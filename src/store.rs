//! Registration state store
//!
//! Bridges the wizard and the checkout within one session. The store is owned
//! by the application and handed to the screens that need it; there is no
//! global instance. Its only mutators are [`RegistrationStore::set_registration`]
//! and [`RegistrationStore::reset`]. Nothing survives the process.

use tracing::debug;

use crate::registration::{OrgInfo, PersonalInfo, RegistrationPayload};
use crate::types::BillingCycle;

/// Snapshot of what the store currently holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationState {
    pub personal: Option<PersonalInfo>,
    pub org: Option<OrgInfo>,
    pub selected_package: Option<String>,
    pub billing_cycle: BillingCycle,
}

impl RegistrationState {
    /// Whether the state is the empty sentinel
    pub fn is_empty(&self) -> bool {
        self.personal.is_none() && self.org.is_none() && self.selected_package.is_none()
    }

    /// Reassemble a payload, if every part is present
    pub fn payload(&self) -> Option<RegistrationPayload> {
        Some(RegistrationPayload {
            personal: self.personal.clone()?,
            org: self.org.clone()?,
            selected_package: self.selected_package.clone()?,
            billing_cycle: self.billing_cycle,
        })
    }
}

/// Single-owner holder of the submitted registration
#[derive(Debug, Clone, Default)]
pub struct RegistrationStore {
    state: RegistrationState,
}

impl RegistrationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the held registration; no merge, no validation
    pub fn set_registration(&mut self, payload: RegistrationPayload) {
        debug!("Registration stored for package {:?}", payload.selected_package);
        self.state = RegistrationState {
            personal: Some(payload.personal),
            org: Some(payload.org),
            selected_package: Some(payload.selected_package),
            billing_cycle: payload.billing_cycle,
        };
    }

    /// Clear back to the empty sentinel
    pub fn reset(&mut self) {
        debug!("Registration store reset");
        self.state = RegistrationState::default();
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    /// The held registration, if one was set
    pub fn registration(&self) -> Option<RegistrationPayload> {
        self.state.payload()
    }

    /// The held registration, or the demo payload when empty
    pub fn registration_or_demo(&self) -> RegistrationPayload {
        self.registration().unwrap_or_else(RegistrationPayload::demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = RegistrationStore::new();
        assert!(store.state().is_empty());
        assert_eq!(store.state().billing_cycle, BillingCycle::Monthly);
        assert!(store.registration().is_none());
    }

    #[test]
    fn test_empty_store_falls_back_to_demo() {
        let store = RegistrationStore::new();
        assert_eq!(store.registration_or_demo(), RegistrationPayload::demo());
    }
}
