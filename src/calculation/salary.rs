//! Salary breakup calculation.
//!
//! This module splits a monthly CTC into Basic, HRA, Conveyance and a
//! residual Special Allowance, derives the standard deductions, and merges
//! caller overrides on top.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::SalaryPolicy;
use crate::models::{AuditStep, OverrideField, SalaryBreakup, SalaryCalculation, SalaryOverrides};

/// Months in a year, for annualising monthly figures.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Largest CTC or override amount accepted at the API boundary: 10^15
/// rupees.
///
/// Every sum and product formed from amounts up to this bound stays well
/// inside `Decimal`'s range. Larger inputs can overflow the calculator.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Splits a monthly CTC into a [`SalaryBreakup`].
///
/// The calculator is stateless apart from its read-only policy, so one
/// instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use payroll_docs::calculation::SalaryCalculator;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakup = SalaryCalculator::default().calculate(Decimal::new(50000, 0), None);
///
/// assert_eq!(breakup.basic, Decimal::from_str("25000.00").unwrap());
/// assert_eq!(breakup.hra, Decimal::from_str("12500.00").unwrap());
/// assert_eq!(breakup.special_allowance, Decimal::from_str("10900.00").unwrap());
/// assert_eq!(breakup.pf, Decimal::from_str("3000.00").unwrap());
/// assert_eq!(breakup.annual_ctc, Decimal::from_str("600000").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalaryCalculator {
    policy: SalaryPolicy,
}

impl SalaryCalculator {
    /// Creates a calculator for the given policy.
    pub fn new(policy: SalaryPolicy) -> Self {
        Self { policy }
    }

    /// Computes the breakup for `monthly_ctc`, applying `overrides` if given.
    ///
    /// No input is rejected: zero or negative CTCs produce arithmetically
    /// consistent, possibly negative, figures.
    pub fn calculate(&self, monthly_ctc: Decimal, overrides: Option<&SalaryOverrides>) -> SalaryBreakup {
        self.calculate_with_audit(monthly_ctc, overrides).breakup
    }

    /// Computes the breakup and records every rule applied along the way.
    pub fn calculate_with_audit(
        &self,
        monthly_ctc: Decimal,
        overrides: Option<&SalaryOverrides>,
    ) -> SalaryCalculation {
        let mut steps = Vec::new();
        let mut breakup = self.default_breakup(monthly_ctc);

        steps.push(AuditStep {
            step_number: 1,
            rule_id: "default_split".to_string(),
            rule_name: "Default Salary Split".to_string(),
            input: serde_json::json!({
                "monthly_ctc": monthly_ctc.to_string(),
                "basic_percent": self.policy.basic_percent.to_string(),
                "hra_percent": self.policy.hra_percent.to_string(),
                "pf_percent_of_basic": self.policy.pf_percent_of_basic.to_string()
            }),
            output: serde_json::json!({
                "basic": breakup.basic.to_string(),
                "hra": breakup.hra.to_string(),
                "conveyance": breakup.conveyance.to_string(),
                "special_allowance": breakup.special_allowance.to_string(),
                "pt": breakup.pt.to_string(),
                "pf": breakup.pf.to_string(),
                "annual_ctc": breakup.annual_ctc.to_string()
            }),
            reasoning: format!(
                "Rs.{} split as Basic {}%, HRA {}%, Conveyance Rs.{}, remainder as Special Allowance",
                monthly_ctc.normalize(),
                (self.policy.basic_percent * Decimal::ONE_HUNDRED).normalize(),
                (self.policy.hra_percent * Decimal::ONE_HUNDRED).normalize(),
                self.policy.conveyance.normalize()
            ),
        });

        if let Some(overrides) = overrides {
            for field in OverrideField::ALL {
                let Some(value) = overrides.effective(field) else {
                    continue;
                };
                let step_number = steps.len() as u32 + 1;

                if field == OverrideField::SpecialAllowance {
                    steps.push(AuditStep {
                        step_number,
                        rule_id: "special_allowance_override_discarded".to_string(),
                        rule_name: "Special Allowance Override Discarded".to_string(),
                        input: serde_json::json!({ "override": value.to_string() }),
                        output: serde_json::json!({ "applied": false }),
                        reasoning: "Special Allowance is always the residual of the CTC".to_string(),
                    });
                    continue;
                }

                let previous = field_value(&breakup, field);
                set_field(&mut breakup, field, value);

                steps.push(AuditStep {
                    step_number,
                    rule_id: "salary_override".to_string(),
                    rule_name: format!("Override {}", field.name()),
                    input: serde_json::json!({
                        "field": field.name(),
                        "default": previous.map(|v| v.to_string()),
                        "override": value.to_string()
                    }),
                    output: serde_json::json!({
                        "field": field.name(),
                        "value": value.to_string(),
                        "applied": true
                    }),
                    reasoning: format!("{} set to Rs.{} by caller", field.name(), value.normalize()),
                });
            }
        }

        let residual = self.residual_special_allowance(&breakup);
        steps.push(AuditStep {
            step_number: steps.len() as u32 + 1,
            rule_id: "special_allowance_residual".to_string(),
            rule_name: "Special Allowance Residual".to_string(),
            input: serde_json::json!({
                "monthly_ctc": breakup.monthly_ctc.to_string(),
                "basic": breakup.basic.to_string(),
                "hra": breakup.hra.to_string(),
                "conveyance": breakup.conveyance.to_string()
            }),
            output: serde_json::json!({ "special_allowance": residual.to_string() }),
            reasoning: format!(
                "Rs.{} - (Rs.{} + Rs.{} + Rs.{}) = Rs.{}",
                breakup.monthly_ctc.normalize(),
                breakup.basic.normalize(),
                breakup.hra.normalize(),
                breakup.conveyance.normalize(),
                residual.normalize()
            ),
        });
        breakup.special_allowance = residual;

        for step in &steps {
            debug!(
                step = step.step_number,
                rule_id = %step.rule_id,
                reasoning = %step.reasoning,
                "Salary rule applied"
            );
        }

        SalaryCalculation {
            breakup,
            audit_steps: steps,
        }
    }

    fn default_breakup(&self, monthly_ctc: Decimal) -> SalaryBreakup {
        let basic = (monthly_ctc * self.policy.basic_percent).round_dp(2);
        let hra = (monthly_ctc * self.policy.hra_percent).round_dp(2);
        let conveyance = self.policy.conveyance;
        let special_allowance = (monthly_ctc - (basic + hra + conveyance)).round_dp(2);

        SalaryBreakup {
            basic,
            hra,
            conveyance,
            special_allowance,
            monthly_ctc,
            annual_ctc: (monthly_ctc * Decimal::from(MONTHS_PER_YEAR)).round_dp(2),
            pt: self.policy.professional_tax,
            pf: (basic * self.policy.pf_percent_of_basic).round_dp(2),
            pf_admin: Decimal::ZERO,
            mobile_deduction: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            travel_allowance: None,
        }
    }

    fn residual_special_allowance(&self, breakup: &SalaryBreakup) -> Decimal {
        (breakup.monthly_ctc - (breakup.basic + breakup.hra + breakup.conveyance)).round_dp(2)
    }
}

fn field_value(breakup: &SalaryBreakup, field: OverrideField) -> Option<Decimal> {
    match field {
        OverrideField::Basic => Some(breakup.basic),
        OverrideField::Hra => Some(breakup.hra),
        OverrideField::Conveyance => Some(breakup.conveyance),
        OverrideField::SpecialAllowance => Some(breakup.special_allowance),
        OverrideField::Pt => Some(breakup.pt),
        OverrideField::Pf => Some(breakup.pf),
        OverrideField::PfAdmin => Some(breakup.pf_admin),
        OverrideField::MobileDeduction => Some(breakup.mobile_deduction),
        OverrideField::HealthInsurance => Some(breakup.health_insurance),
        OverrideField::TravelAllowance => breakup.travel_allowance,
    }
}

fn set_field(breakup: &mut SalaryBreakup, field: OverrideField, value: Decimal) {
    match field {
        OverrideField::Basic => breakup.basic = value,
        OverrideField::Hra => breakup.hra = value,
        OverrideField::Conveyance => breakup.conveyance = value,
        OverrideField::SpecialAllowance => breakup.special_allowance = value,
        OverrideField::Pt => breakup.pt = value,
        OverrideField::Pf => breakup.pf = value,
        OverrideField::PfAdmin => breakup.pf_admin = value,
        OverrideField::MobileDeduction => breakup.mobile_deduction = value,
        OverrideField::HealthInsurance => breakup.health_insurance = value,
        OverrideField::TravelAllowance => breakup.travel_allowance = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn calculate(monthly_ctc: &str, overrides: Option<&SalaryOverrides>) -> SalaryBreakup {
        SalaryCalculator::default().calculate(dec(monthly_ctc), overrides)
    }

    /// SC-001: 50,000 with no overrides
    #[test]
    fn test_default_split_for_50000() {
        let breakup = calculate("50000", None);

        assert_eq!(breakup.basic, dec("25000.00"));
        assert_eq!(breakup.hra, dec("12500.00"));
        assert_eq!(breakup.conveyance, dec("1600.00"));
        assert_eq!(breakup.special_allowance, dec("10900.00"));
        assert_eq!(breakup.pf, dec("3000.00"));
        assert_eq!(breakup.pt, dec("200.00"));
        assert_eq!(breakup.annual_ctc, dec("600000.00"));
        assert_eq!(breakup.pf_admin, Decimal::ZERO);
        assert_eq!(breakup.mobile_deduction, Decimal::ZERO);
        assert_eq!(breakup.health_insurance, Decimal::ZERO);
        assert_eq!(breakup.travel_allowance, None);
    }

    /// SC-002: odd paise round to two places and the residual absorbs the difference
    #[test]
    fn test_rounding_keeps_sum_exact() {
        let breakup = calculate("33333.33", None);

        assert_eq!(breakup.basic, dec("16666.66"));
        assert_eq!(breakup.hra, dec("8333.33"));
        assert_eq!(breakup.special_allowance, dec("6733.34"));
        assert_eq!(breakup.earnings_total(), dec("33333.33"));
        assert_eq!(breakup.annual_ctc, dec("399999.96"));
    }

    /// SC-003: small CTC leaves a negative special allowance
    #[test]
    fn test_small_ctc_gives_negative_special_allowance() {
        let breakup = calculate("2000", None);

        assert_eq!(breakup.basic, dec("1000.00"));
        assert_eq!(breakup.hra, dec("500.00"));
        assert_eq!(breakup.special_allowance, dec("-1100.00"));
        assert_eq!(breakup.earnings_total(), dec("2000"));
    }

    #[test]
    fn test_zero_ctc() {
        let breakup = calculate("0", None);
        assert_eq!(breakup.basic, Decimal::ZERO);
        assert_eq!(breakup.special_allowance, dec("-1600"));
        assert_eq!(breakup.annual_ctc, Decimal::ZERO);
    }

    #[test]
    fn test_negative_ctc_propagates() {
        let breakup = calculate("-1000", None);
        assert_eq!(breakup.basic, dec("-500.00"));
        assert_eq!(breakup.annual_ctc, dec("-12000"));
        assert_eq!(breakup.earnings_total(), dec("-1000"));
    }

    #[test]
    fn test_basic_override_recomputes_special_but_not_pf() {
        let overrides = SalaryOverrides {
            basic: Some(dec("30000")),
            ..Default::default()
        };
        let breakup = calculate("50000", Some(&overrides));

        assert_eq!(breakup.basic, dec("30000"));
        assert_eq!(breakup.special_allowance, dec("5900.00"));
        // PF was derived from the default basic before the merge
        assert_eq!(breakup.pf, dec("3000.00"));
    }

    #[test]
    fn test_special_allowance_override_is_discarded() {
        let overrides = SalaryOverrides {
            special_allowance: Some(dec("99999")),
            ..Default::default()
        };
        let calculation =
            SalaryCalculator::default().calculate_with_audit(dec("50000"), Some(&overrides));

        assert_eq!(calculation.breakup.special_allowance, dec("10900.00"));
        assert!(calculation
            .audit_steps
            .iter()
            .any(|s| s.rule_id == "special_allowance_override_discarded"));
    }

    #[test]
    fn test_non_positive_overrides_leave_defaults() {
        let overrides = SalaryOverrides {
            basic: Some(Decimal::ZERO),
            hra: Some(dec("-5")),
            conveyance: Some(Decimal::ZERO),
            pt: Some(Decimal::ZERO),
            pf: Some(dec("-1")),
            pf_admin: Some(Decimal::ZERO),
            mobile_deduction: Some(Decimal::ZERO),
            health_insurance: Some(dec("-0.01")),
            ..Default::default()
        };
        assert_eq!(calculate("50000", Some(&overrides)), calculate("50000", None));
    }

    #[test]
    fn test_travel_allowance_zero_override_applies() {
        let overrides = SalaryOverrides {
            travel_allowance: Some(Decimal::ZERO),
            ..Default::default()
        };
        let breakup = calculate("50000", Some(&overrides));
        assert_eq!(breakup.travel_allowance, Some(Decimal::ZERO));
    }

    #[test]
    fn test_travel_allowance_negative_override_is_not_applicable() {
        let overrides = SalaryOverrides {
            travel_allowance: Some(dec("-1")),
            ..Default::default()
        };
        let breakup = calculate("50000", Some(&overrides));
        assert_eq!(breakup.travel_allowance, None);
    }

    #[test]
    fn test_deduction_overrides_apply() {
        let overrides = SalaryOverrides {
            pt: Some(dec("150")),
            pf: Some(dec("1800")),
            pf_admin: Some(dec("75")),
            mobile_deduction: Some(dec("499")),
            health_insurance: Some(dec("1200")),
            ..Default::default()
        };
        let breakup = calculate("50000", Some(&overrides));

        assert_eq!(breakup.pt, dec("150"));
        assert_eq!(breakup.pf, dec("1800"));
        assert_eq!(breakup.pf_admin, dec("75"));
        assert_eq!(breakup.mobile_deduction, dec("499"));
        assert_eq!(breakup.health_insurance, dec("1200"));
        assert_eq!(breakup.net_take_home(), dec("48050.00"));
    }

    #[test]
    fn test_override_equal_to_default_is_idempotent() {
        let overrides = SalaryOverrides {
            basic: Some(dec("25000.00")),
            hra: Some(dec("12500.00")),
            conveyance: Some(dec("1600")),
            pf: Some(dec("3000.00")),
            pt: Some(dec("200")),
            ..Default::default()
        };
        assert_eq!(calculate("50000", Some(&overrides)), calculate("50000", None));
    }

    #[test]
    fn test_audit_trail_order_and_numbering() {
        let overrides = SalaryOverrides {
            hra: Some(dec("10000")),
            pf_admin: Some(dec("150")),
            ..Default::default()
        };
        let calculation =
            SalaryCalculator::default().calculate_with_audit(dec("50000"), Some(&overrides));

        let rule_ids: Vec<&str> = calculation
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "default_split",
                "salary_override",
                "salary_override",
                "special_allowance_residual"
            ]
        );
        let numbers: Vec<u32> = calculation.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);

        let hra_step = &calculation.audit_steps[1];
        assert_eq!(hra_step.input["field"].as_str().unwrap(), "hra");
        assert_eq!(hra_step.input["default"].as_str().unwrap(), "12500.00");
        assert!(hra_step.reasoning.contains("Rs.10000"));
    }

    #[test]
    fn test_residual_reasoning_explains_calculation() {
        let calculation = SalaryCalculator::default().calculate_with_audit(dec("50000"), None);
        let last = calculation.audit_steps.last().unwrap();

        assert_eq!(last.rule_id, "special_allowance_residual");
        assert_eq!(
            last.reasoning,
            "Rs.50000 - (Rs.25000 + Rs.12500 + Rs.1600) = Rs.10900"
        );
    }

    #[test]
    fn test_reasoning_is_in_rupees() {
        let overrides = SalaryOverrides {
            hra: Some(dec("9000")),
            ..Default::default()
        };
        let calculation =
            SalaryCalculator::default().calculate_with_audit(dec("50000"), Some(&overrides));

        for step in &calculation.audit_steps {
            assert!(!step.reasoning.contains('$'), "{}", step.reasoning);
        }
        assert!(calculation.audit_steps[0].reasoning.starts_with("Rs.50000 split"));
    }

    #[test]
    fn test_max_amount_does_not_overflow() {
        assert_eq!(MAX_AMOUNT, dec("1000000000000000"));

        let overrides = SalaryOverrides {
            basic: Some(MAX_AMOUNT),
            hra: Some(MAX_AMOUNT),
            conveyance: Some(MAX_AMOUNT),
            pf: Some(MAX_AMOUNT),
            travel_allowance: Some(MAX_AMOUNT),
            ..Default::default()
        };
        let breakup = SalaryCalculator::default().calculate(MAX_AMOUNT, Some(&overrides));

        assert_eq!(breakup.annual_ctc, MAX_AMOUNT * Decimal::from(MONTHS_PER_YEAR));
        assert_eq!(
            breakup.basic + breakup.hra + breakup.conveyance + breakup.special_allowance,
            MAX_AMOUNT
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = SalaryPolicy {
            basic_percent: dec("0.40"),
            hra_percent: dec("0.20"),
            conveyance: dec("1000"),
            professional_tax: dec("150"),
            pf_percent_of_basic: dec("0.12"),
        };
        let breakup = SalaryCalculator::new(policy).calculate(dec("50000"), None);

        assert_eq!(breakup.basic, dec("20000.00"));
        assert_eq!(breakup.hra, dec("10000.00"));
        assert_eq!(breakup.special_allowance, dec("19000.00"));
        assert_eq!(breakup.pf, dec("2400.00"));
        assert_eq!(breakup.pt, dec("150"));
    }
}
