//! Payslip deduction policy.
//!
//! A payslip reuses the calculator's earnings but never its deductions:
//! PF, PT and PF admin start from the fixed payslip defaults, and the caller's
//! overrides replace them under the usual "greater than zero" rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayslipPolicy;
use crate::models::{OverrideField, SalaryBreakup, SalaryOverrides};

/// Figures printed on a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipFigures {
    /// Basic pay.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Residual special allowance.
    pub special_allowance: Decimal,
    /// Travel allowance, zero when none was supplied.
    pub travel_allowance: Decimal,
    /// Total earnings, always the monthly CTC.
    pub total_earnings: Decimal,
    /// Provident fund.
    pub pf: Decimal,
    /// Professional tax.
    pub pt: Decimal,
    /// Provident fund admin charge.
    pub pf_admin: Decimal,
    /// Mobile deduction.
    pub mobile_deduction: Decimal,
    /// Health insurance deduction.
    pub health_insurance: Decimal,
    /// Sum of the five deductions.
    pub total_deductions: Decimal,
    /// `total_earnings - total_deductions`.
    pub net_pay: Decimal,
}

/// Builds payslip figures from a default breakup and the caller's overrides.
///
/// `breakup` must come from a calculation without overrides; only its
/// earnings are used.
///
/// # Examples
///
/// ```
/// use payroll_docs::calculation::{apply_payslip_deductions, SalaryCalculator};
/// use payroll_docs::config::PayslipPolicy;
/// use payroll_docs::models::SalaryOverrides;
/// use rust_decimal::Decimal;
///
/// let breakup = SalaryCalculator::default().calculate(Decimal::new(50000, 0), None);
/// let figures = apply_payslip_deductions(&breakup, &SalaryOverrides::default(), &PayslipPolicy::default());
///
/// assert_eq!(figures.total_deductions, Decimal::new(3950, 0));
/// assert_eq!(figures.net_pay, Decimal::new(46050, 0));
/// ```
pub fn apply_payslip_deductions(
    breakup: &SalaryBreakup,
    overrides: &SalaryOverrides,
    policy: &PayslipPolicy,
) -> PayslipFigures {
    let pick = |field: OverrideField, default: Decimal| overrides.effective(field).unwrap_or(default);

    let pf = pick(OverrideField::Pf, policy.provident_fund);
    let pt = pick(OverrideField::Pt, policy.professional_tax);
    let pf_admin = pick(OverrideField::PfAdmin, policy.pf_admin);
    let mobile_deduction = pick(OverrideField::MobileDeduction, Decimal::ZERO);
    let health_insurance = pick(OverrideField::HealthInsurance, Decimal::ZERO);
    let travel_allowance = pick(OverrideField::TravelAllowance, Decimal::ZERO);

    let total_deductions = pf + pt + pf_admin + mobile_deduction + health_insurance;

    PayslipFigures {
        basic: breakup.basic,
        hra: breakup.hra,
        conveyance: breakup.conveyance,
        special_allowance: breakup.special_allowance,
        travel_allowance,
        total_earnings: breakup.monthly_ctc,
        pf,
        pt,
        pf_admin,
        mobile_deduction,
        health_insurance,
        total_deductions,
        net_pay: breakup.monthly_ctc - total_deductions,
    }
}
