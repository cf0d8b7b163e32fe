//! Property tests for the salary split and the words converter.

use payroll_docs::calculation::{SalaryCalculator, amount_in_words};
use payroll_docs::models::SalaryOverrides;
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

/// Amounts in paise, i.e. two decimal places, up to ten crore rupees.
fn amount() -> impl Strategy<Value = Decimal> {
    (0_i64..10_000_000_000_i64).prop_map(|paise| Decimal::new(paise, 2))
}

fn optional_amount() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        Just(None),
        amount().prop_map(Some),
        (-100_000_i64..=0_i64).prop_map(|paise| Some(Decimal::new(paise, 2))),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn earnings_always_sum_to_ctc(
        ctc in amount(),
        basic in optional_amount(),
        hra in optional_amount(),
        conveyance in optional_amount(),
        special_allowance in optional_amount(),
    ) {
        let overrides = SalaryOverrides {
            basic,
            hra,
            conveyance,
            special_allowance,
            ..Default::default()
        };
        let breakup = SalaryCalculator::default().calculate(ctc, Some(&overrides));

        prop_assert_eq!(
            breakup.basic + breakup.hra + breakup.conveyance + breakup.special_allowance,
            ctc
        );
        prop_assert_eq!(breakup.annual_ctc, ctc * Decimal::from(12));
        prop_assert_eq!(breakup.monthly_ctc, ctc);
    }

    #[test]
    fn non_positive_overrides_change_nothing(
        ctc in amount(),
        value in -100_000_i64..=0_i64,
    ) {
        let value = Decimal::new(value, 2);
        let overrides = SalaryOverrides {
            basic: Some(value),
            hra: Some(value),
            conveyance: Some(value),
            pt: Some(value),
            pf: Some(value),
            pf_admin: Some(value),
            mobile_deduction: Some(value),
            health_insurance: Some(value),
            ..Default::default()
        };
        let calculator = SalaryCalculator::default();

        prop_assert_eq!(
            calculator.calculate(ctc, Some(&overrides)),
            calculator.calculate(ctc, None)
        );
    }

    #[test]
    fn positive_overrides_replace_defaults(
        ctc in amount(),
        hra in 1_i64..10_000_000_i64,
        pf in 1_i64..10_000_000_i64,
    ) {
        let hra = Decimal::new(hra, 2);
        let pf = Decimal::new(pf, 2);
        let overrides = SalaryOverrides {
            hra: Some(hra),
            pf: Some(pf),
            ..Default::default()
        };
        let breakup = SalaryCalculator::default().calculate(ctc, Some(&overrides));

        prop_assert_eq!(breakup.hra, hra);
        prop_assert_eq!(breakup.pf, pf);
    }

    #[test]
    fn travel_allowance_keeps_zero_and_drops_negatives(
        ctc in amount(),
        travel in -100_000_i64..100_000_i64,
    ) {
        let travel = Decimal::new(travel, 2);
        let overrides = SalaryOverrides {
            travel_allowance: Some(travel),
            ..Default::default()
        };
        let breakup = SalaryCalculator::default().calculate(ctc, Some(&overrides));

        if travel >= Decimal::ZERO {
            prop_assert_eq!(breakup.travel_allowance, Some(travel));
        } else {
            prop_assert_eq!(breakup.travel_allowance, None);
        }
    }

    #[test]
    fn default_pf_is_twelve_percent_of_basic(ctc in amount()) {
        let breakup = SalaryCalculator::default().calculate(ctc, None);
        prop_assert_eq!(breakup.pf, (breakup.basic * Decimal::new(12, 2)).round_dp(2));
        prop_assert_eq!(breakup.pt, Decimal::from(200));
    }

    #[test]
    fn calculation_is_deterministic(ctc in amount(), basic in optional_amount()) {
        let overrides = SalaryOverrides { basic, ..Default::default() };
        let calculator = SalaryCalculator::default();

        prop_assert_eq!(
            calculator.calculate_with_audit(ctc, Some(&overrides)),
            calculator.calculate_with_audit(ctc, Some(&overrides))
        );
    }

    #[test]
    fn words_are_well_formed(n in any::<i64>()) {
        let words = amount_in_words(n);

        prop_assert!(!words.is_empty());
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "));
        prop_assert_eq!(words.starts_with("Minus "), n < 0);
        prop_assert_eq!(words == "Zero", n == 0);
    }

    #[test]
    fn negative_words_mirror_positive(n in 1_i64..i64::MAX) {
        prop_assert_eq!(amount_in_words(-n), format!("Minus {}", amount_in_words(n)));
    }
}
