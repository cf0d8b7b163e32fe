//! Salary breakup models.
//!
//! This module contains the [`SalaryBreakup`] produced by the salary
//! calculator, together with the audit records that explain how each figure
//! was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monthly CTC split into earnings and deductions.
///
/// `basic + hra + conveyance + special_allowance` always equals
/// `monthly_ctc`, and `annual_ctc` is always `monthly_ctc * 12`.
///
/// # Example
///
/// ```
/// use payroll_docs::calculation::SalaryCalculator;
/// use rust_decimal::Decimal;
///
/// let breakup = SalaryCalculator::default().calculate(Decimal::new(50000, 0), None);
/// assert_eq!(breakup.earnings_total(), breakup.monthly_ctc);
/// assert_eq!(breakup.net_take_home(), Decimal::new(46800, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakup {
    /// Basic pay.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Residual allowance balancing the CTC. May be negative for small CTCs.
    pub special_allowance: Decimal,
    /// Monthly cost to company.
    pub monthly_ctc: Decimal,
    /// Annual cost to company.
    pub annual_ctc: Decimal,
    /// Professional tax.
    pub pt: Decimal,
    /// Provident fund.
    pub pf: Decimal,
    /// Provident fund admin charge.
    pub pf_admin: Decimal,
    /// Mobile deduction.
    pub mobile_deduction: Decimal,
    /// Health insurance deduction.
    pub health_insurance: Decimal,
    /// Travel allowance; `None` means not applicable.
    pub travel_allowance: Option<Decimal>,
}

impl SalaryBreakup {
    /// Sum of the four CTC components.
    pub fn earnings_total(&self) -> Decimal {
        self.basic + self.hra + self.conveyance + self.special_allowance
    }

    /// Monthly take-home after professional tax and provident fund.
    pub fn net_take_home(&self) -> Decimal {
        (self.monthly_ctc - (self.pt + self.pf)).round_dp(2)
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The breakup together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// The final breakup.
    pub breakup: SalaryBreakup,
    /// Ordered record of every rule applied.
    pub audit_steps: Vec<AuditStep>,
}
