//! Tests for domain_loan
//!
//! - `eligibility_tests` - LTV advance and the loan cap
//! - `emi_tests` - both installment conventions and their validation
//! - `schedule_tests` - amortization rows against the EMI

use core_kernel::{GoldWeight, InvalidInputError, Money, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_loan::{
    amortization_schedule, compute_eligibility, compute_emi, compute_flat_emi,
    monthly_interest_only, LoanTerms, RepaymentMethod,
};

fn terms(grams: Decimal, price: Decimal, ltv: Decimal) -> LoanTerms {
    LoanTerms::new(
        GoldWeight::from_grams(grams),
        Money::inr(price),
        Rate::from_percentage(ltv),
        Rate::from_percentage(dec!(9.5)),
        12,
    )
}

// ============================================================================
// Eligibility Tests
// ============================================================================

mod eligibility_tests {
    use super::*;

    #[test]
    fn test_eligible_amount_is_capped() {
        let result =
            compute_eligibility(&terms(dec!(10), dec!(6000), dec!(75)), Some(Money::inr(dec!(30000))))
                .unwrap();

        assert_eq!(result.eligible_amount.amount(), dec!(30000));
        assert!(result.capped);
    }

    #[test]
    fn test_eligible_never_exceeds_collateral() {
        let result = compute_eligibility(&terms(dec!(3.25), dec!(6321.40), dec!(100)), None).unwrap();
        assert_eq!(result.eligible_amount, result.collateral_value);
    }

    #[test]
    fn test_zero_ltv_gives_nothing() {
        let result = compute_eligibility(&terms(dec!(10), dec!(6000), dec!(0)), None).unwrap();
        assert!(result.eligible_amount.is_zero());
    }

    #[test]
    fn test_negative_ltv_rejected() {
        let result = compute_eligibility(&terms(dec!(10), dec!(6000), dec!(-5)), None);
        assert!(matches!(
            result,
            Err(InvalidInputError::RateOutOfRange { field: "ltv_ratio", .. })
        ));
    }

    #[test]
    fn test_negative_cap_rejected() {
        let result =
            compute_eligibility(&terms(dec!(10), dec!(6000), dec!(75)), Some(Money::inr(dec!(-1))));
        assert!(matches!(result, Err(InvalidInputError::NegativeAmount { .. })));
    }
}

// ============================================================================
// EMI Tests
// ============================================================================

mod emi_tests {
    use super::*;

    #[test]
    fn test_zero_tenure_is_invalid() {
        let result = compute_emi(Money::inr(dec!(1000)), Rate::from_percentage(dec!(9.5)), 0);
        assert!(matches!(result, Err(InvalidInputError::NonPositiveDuration { .. })));
    }

    #[test]
    fn test_zero_principal_is_invalid() {
        let result = compute_emi(Money::inr(Decimal::ZERO), Rate::from_percentage(dec!(9.5)), 12);
        assert!(matches!(
            result,
            Err(InvalidInputError::NonPositiveAmount { field: "principal", .. })
        ));
    }

    #[test]
    fn test_negative_rate_is_invalid() {
        let result = compute_flat_emi(Money::inr(dec!(1000)), Rate::from_percentage(dec!(-1)), 12);
        assert!(matches!(result, Err(InvalidInputError::NegativeRate { .. })));
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let result = compute_emi(Money::inr(dec!(50000)), Rate::zero(), 10).unwrap();
        assert_eq!(result.emi.amount(), dec!(5000));
        assert!(result.total_interest.is_zero());
    }

    #[test]
    fn test_total_payable_is_emi_times_tenure() {
        let result =
            compute_emi(Money::inr(dec!(250000)), Rate::from_percentage(dec!(11)), 36).unwrap();
        assert_eq!(result.total_payable.amount(), result.emi.amount() * dec!(36));
    }

    #[test]
    fn test_repayment_method_serializes_snake_case() {
        let json = serde_json::to_string(&RepaymentMethod::FlatInterest).unwrap();
        assert_eq!(json, "\"flat_interest\"");
    }

    #[test]
    fn test_interest_only_rejects_zero_principal() {
        let result = monthly_interest_only(Money::inr(Decimal::ZERO), Rate::from_percentage(dec!(12)));
        assert!(result.is_err());
    }
}

// ============================================================================
// Schedule Tests
// ============================================================================

mod schedule_tests {
    use super::*;

    #[test]
    fn test_schedule_matches_emi() {
        let principal = Money::inr(dec!(100000));
        let rate = Rate::from_percentage(dec!(12));
        let emi = compute_emi(principal, rate, 12).unwrap();
        let schedule = amortization_schedule(principal, rate, 12).unwrap();

        for row in &schedule[..11] {
            assert_eq!(row.emi, emi.emi);
        }
        let last = schedule[11];
        assert_eq!(last.emi.round_to_currency(), emi.emi.round_to_currency());
        assert!(last.closing_balance.is_zero());
    }

    #[test]
    fn test_interest_falls_each_month() {
        let schedule =
            amortization_schedule(Money::inr(dec!(200000)), Rate::from_percentage(dec!(10)), 24)
                .unwrap();

        for pair in schedule.windows(2) {
            assert!(pair[1].interest.amount() < pair[0].interest.amount());
        }
    }

    #[test]
    fn test_single_month_schedule() {
        let schedule =
            amortization_schedule(Money::inr(dec!(10000)), Rate::from_percentage(dec!(12)), 1)
                .unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].emi.amount(), dec!(10100));
        assert_eq!(schedule[0].principal.amount(), dec!(10000));
    }
}
