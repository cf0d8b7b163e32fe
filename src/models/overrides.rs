//! Caller-supplied salary overrides.
//!
//! Every field is optional. A supplied value only counts when it passes the
//! acceptance rule in [`SalaryOverrides::effective`]: zero or negative values
//! are treated as absent, except for travel allowance where zero is a real
//! amount and only negative values mean "not applicable".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one overridable salary component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideField {
    /// Basic pay.
    Basic,
    /// House rent allowance.
    Hra,
    /// Conveyance allowance.
    Conveyance,
    /// Special allowance. Always recomputed as the residual of the CTC.
    SpecialAllowance,
    /// Professional tax.
    Pt,
    /// Provident fund.
    Pf,
    /// Provident fund admin charge.
    PfAdmin,
    /// Mobile deduction.
    MobileDeduction,
    /// Health insurance deduction.
    HealthInsurance,
    /// Travel allowance.
    TravelAllowance,
}

impl OverrideField {
    /// All fields in breakup order.
    pub const ALL: [OverrideField; 10] = [
        OverrideField::Basic,
        OverrideField::Hra,
        OverrideField::Conveyance,
        OverrideField::SpecialAllowance,
        OverrideField::Pt,
        OverrideField::Pf,
        OverrideField::PfAdmin,
        OverrideField::MobileDeduction,
        OverrideField::HealthInsurance,
        OverrideField::TravelAllowance,
    ];

    /// The snake_case wire name of the field.
    pub fn name(self) -> &'static str {
        match self {
            OverrideField::Basic => "basic",
            OverrideField::Hra => "hra",
            OverrideField::Conveyance => "conveyance",
            OverrideField::SpecialAllowance => "special_allowance",
            OverrideField::Pt => "pt",
            OverrideField::Pf => "pf",
            OverrideField::PfAdmin => "pf_admin",
            OverrideField::MobileDeduction => "mobile_deduction",
            OverrideField::HealthInsurance => "health_insurance",
            OverrideField::TravelAllowance => "travel_allowance",
        }
    }
}

/// Optional per-field replacements for the computed salary breakup.
///
/// # Example
///
/// ```
/// use payroll_docs::models::{OverrideField, SalaryOverrides};
/// use rust_decimal::Decimal;
///
/// let overrides = SalaryOverrides {
///     basic: Some(Decimal::ZERO),
///     travel_allowance: Some(Decimal::ZERO),
///     ..Default::default()
/// };
///
/// // Zero basic is treated as absent, zero travel allowance is kept.
/// assert_eq!(overrides.effective(OverrideField::Basic), None);
/// assert_eq!(overrides.effective(OverrideField::TravelAllowance), Some(Decimal::ZERO));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryOverrides {
    /// Basic pay.
    #[serde(default)]
    pub basic: Option<Decimal>,
    /// House rent allowance.
    #[serde(default)]
    pub hra: Option<Decimal>,
    /// Conveyance allowance.
    #[serde(default)]
    pub conveyance: Option<Decimal>,
    /// Special allowance (accepted on the wire, discarded by recomputation).
    #[serde(default)]
    pub special_allowance: Option<Decimal>,
    /// Professional tax.
    #[serde(default)]
    pub pt: Option<Decimal>,
    /// Provident fund.
    #[serde(default)]
    pub pf: Option<Decimal>,
    /// Provident fund admin charge.
    #[serde(default)]
    pub pf_admin: Option<Decimal>,
    /// Mobile deduction.
    #[serde(default)]
    pub mobile_deduction: Option<Decimal>,
    /// Health insurance deduction.
    #[serde(default)]
    pub health_insurance: Option<Decimal>,
    /// Travel allowance.
    #[serde(default)]
    pub travel_allowance: Option<Decimal>,
}

impl SalaryOverrides {
    /// Returns the value as supplied, before the acceptance rule.
    pub fn raw(&self, field: OverrideField) -> Option<Decimal> {
        match field {
            OverrideField::Basic => self.basic,
            OverrideField::Hra => self.hra,
            OverrideField::Conveyance => self.conveyance,
            OverrideField::SpecialAllowance => self.special_allowance,
            OverrideField::Pt => self.pt,
            OverrideField::Pf => self.pf,
            OverrideField::PfAdmin => self.pf_admin,
            OverrideField::MobileDeduction => self.mobile_deduction,
            OverrideField::HealthInsurance => self.health_insurance,
            OverrideField::TravelAllowance => self.travel_allowance,
        }
    }

    /// Returns the override that should replace the computed value, if any.
    ///
    /// Travel allowance accepts any value `>= 0`; every other field only
    /// accepts values strictly greater than zero.
    pub fn effective(&self, field: OverrideField) -> Option<Decimal> {
        let raw = self.raw(field);
        match field {
            OverrideField::TravelAllowance => raw.filter(|value| *value >= Decimal::ZERO),
            _ => raw.filter(|value| *value > Decimal::ZERO),
        }
    }
}
