//! Fixed product catalog
//!
//! Packages, add-on services, coupon codes and the nationality list are
//! immutable tables defined at compile time. Lookups that may miss come in a
//! plain form returning `Option` and a resolve-with-default form used by the
//! checkout.

use crate::types::{BillingCycle, PackageTier};

/// A subscription package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub tier: PackageTier,
    pub name: &'static str,
    /// Price per month on monthly billing
    pub monthly_price: u32,
    /// Price per month on yearly billing (discount already baked in)
    pub yearly_price: u32,
    pub employee_limit: u32,
    /// Per-employee cost label shown on the package card
    pub cost_per_employee: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

impl Package {
    /// Catalog id of this package
    pub fn id(&self) -> &'static str {
        self.tier.id()
    }

    /// Price for the given billing cycle
    pub fn price_for(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }
}

/// An optional service bought on top of a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonService {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    /// Overrides `price` everywhere totals are computed
    pub discount_price: Option<u32>,
}

impl AddonService {
    /// The price that counts toward totals
    pub fn effective_price(&self) -> u32 {
        self.discount_price.unwrap_or(self.price)
    }
}

/// Tier used when a package id is not in the catalog
pub const DEFAULT_PACKAGE_TIER: PackageTier = PackageTier::Starter;

pub const PACKAGES: &[Package] = &[
    Package {
        tier: PackageTier::Starter,
        name: "Starter",
        monthly_price: 0,
        yearly_price: 0,
        employee_limit: 10,
        cost_per_employee: "Free",
        popular: false,
        features: &["Up to 10 employees", "Basic attendance", "1 branch", "Email support"],
    },
    Package {
        tier: PackageTier::Professional,
        name: "Professional",
        monthly_price: 49,
        yearly_price: 39,
        employee_limit: 50,
        cost_per_employee: "~150 EGP",
        popular: true,
        features: &[
            "Up to 50 employees",
            "Full attendance + payroll",
            "5 branches",
            "Priority support",
            "Geofencing",
        ],
    },
    Package {
        tier: PackageTier::Enterprise,
        name: "Enterprise",
        monthly_price: 149,
        yearly_price: 119,
        employee_limit: 500,
        cost_per_employee: "~100 EGP",
        popular: false,
        features: &[
            "Up to 500 employees",
            "Everything in Pro",
            "Unlimited branches",
            "Dedicated support",
            "Custom integrations",
            "API access",
        ],
    },
];

pub const ADDON_SERVICES: &[AddonService] = &[
    AddonService {
        id: "geofencing",
        name: "Advanced Geofencing",
        description: "GPS-based attendance with polygon zones",
        price: 15,
        discount_price: Some(10),
    },
    AddonService {
        id: "analytics",
        name: "Advanced Analytics",
        description: "Detailed reports & workforce insights",
        price: 20,
        discount_price: None,
    },
    AddonService {
        id: "notifications",
        name: "Smart Notifications",
        description: "Automated alerts for managers & employees",
        price: 8,
        discount_price: None,
    },
    AddonService {
        id: "payroll",
        name: "Payroll Integration",
        description: "Auto-calculate salaries & overtime",
        price: 25,
        discount_price: Some(18),
    },
    AddonService {
        id: "api",
        name: "API Access",
        description: "Connect with your existing systems",
        price: 30,
        discount_price: None,
    },
];

/// Coupon codes (lowercase) and their percentage off
pub const COUPONS: &[(&str, u32)] = &[("dwamee20", 20), ("welcome10", 10)];

pub const NATIONALITIES: &[&str] = &[
    "Egyptian", "Saudi", "Emirati", "Kuwaiti", "Qatari", "Bahraini", "Omani", "Jordanian",
    "Lebanese", "Iraqi", "Moroccan", "Tunisian", "Algerian", "American", "British", "Canadian",
    "German", "French", "Indian", "Other",
];

/// Look up a package by its exact id
pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id() == id)
}

/// Look up a package, falling back to [`DEFAULT_PACKAGE_TIER`] for unknown ids
pub fn resolve_package(id: &str) -> &'static Package {
    find_package(id).unwrap_or_else(|| package_for_tier(DEFAULT_PACKAGE_TIER))
}

/// The catalog entry for a tier
pub fn package_for_tier(tier: PackageTier) -> &'static Package {
    // Every tier has exactly one entry, in declaration order.
    &PACKAGES[tier as usize]
}

/// Look up an add-on service by its exact id
pub fn find_addon(id: &str) -> Option<&'static AddonService> {
    ADDON_SERVICES.iter().find(|s| s.id == id)
}

/// Effective price of an add-on, zero for ids not in the catalog
pub fn resolve_addon_price(id: &str) -> u32 {
    find_addon(id).map_or(0, AddonService::effective_price)
}

/// Percentage off for a coupon code, matched case-insensitively
pub fn coupon_percent(code: &str) -> Option<u32> {
    let code = code.to_lowercase();
    COUPONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, percent)| *percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_package_for_tier_matches_catalog_order() {
        for tier in PackageTier::iter() {
            assert_eq!(package_for_tier(tier).tier, tier);
        }
    }

    #[test]
    fn test_resolve_package_defaults_to_starter() {
        assert_eq!(resolve_package("platinum").tier, PackageTier::Starter);
        assert_eq!(resolve_package("").tier, PackageTier::Starter);
        assert_eq!(resolve_package("enterprise").tier, PackageTier::Enterprise);
    }

    #[test]
    fn test_package_ids_are_case_sensitive() {
        assert!(find_package("Professional").is_none());
        assert_eq!(resolve_package("Professional").tier, PackageTier::Starter);
    }

    #[test]
    fn test_addon_effective_price() {
        assert_eq!(resolve_addon_price("geofencing"), 10);
        assert_eq!(resolve_addon_price("analytics"), 20);
        assert_eq!(resolve_addon_price("payroll"), 18);
        assert_eq!(resolve_addon_price("teleport"), 0);
    }

    #[test]
    fn test_coupon_lookup() {
        assert_eq!(coupon_percent("dwamee20"), Some(20));
        assert_eq!(coupon_percent("WeLcOmE10"), Some(10));
        assert_eq!(coupon_percent(" dwamee20"), None);
        assert_eq!(coupon_percent(""), None);
    }

    #[test]
    fn test_yearly_never_exceeds_monthly() {
        for package in PACKAGES {
            assert!(package.yearly_price <= package.monthly_price);
        }
    }
}
