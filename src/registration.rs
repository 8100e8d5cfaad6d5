//! Registration data
//!
//! [`RegistrationPayload`] is the single object passed from the wizard to the
//! checkout. Nothing is validated along the way: empty fields and unknown
//! package ids are carried through as-is.

use serde::{Deserialize, Serialize};

use crate::types::{BillingCycle, PackageTier};

/// Step 1 of the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub username: String,
    pub phone: String,
    pub nationality: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Step 2 of the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgInfo {
    pub name: String,
    pub location: String,
}

/// Everything the wizard collected, handed to the checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub personal: PersonalInfo,
    pub org: OrgInfo,
    /// Package id; resolved against the catalog only at checkout
    pub selected_package: String,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
}

impl RegistrationPayload {
    /// Payload shown when the checkout is opened without a registration
    pub fn demo() -> Self {
        Self {
            personal: PersonalInfo {
                username: "Ahmed Mohamed".to_string(),
                phone: "+20 123 456 7890".to_string(),
                nationality: "Egyptian".to_string(),
                password: String::new(),
                confirm_password: String::new(),
            },
            org: OrgInfo {
                name: "TechCorp Egypt".to_string(),
                location: "Cairo, Egypt".to_string(),
            },
            selected_package: PackageTier::Professional.id().to_string(),
            billing_cycle: BillingCycle::Monthly,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_payload() {
        let demo = RegistrationPayload::demo();
        assert_eq!(demo.selected_package, "professional");
        assert_eq!(demo.billing_cycle, BillingCycle::Monthly);
        assert_eq!(demo.org.name, "TechCorp Egypt");
    }

    #[test]
    fn test_missing_billing_cycle_defaults_to_monthly() {
        let json = r#"{
            "personal": {"username": "a", "phone": "", "nationality": ""},
            "org": {"name": "", "location": ""},
            "selected_package": "enterprise"
        }"#;
        let payload: RegistrationPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.billing_cycle, BillingCycle::Monthly);
        assert!(payload.personal.password.is_empty());
    }
}
