//! Discount rules and the calculator the processor depends on.

use serde::{Deserialize, Serialize};

use shopflow_core::{DomainError, DomainResult, ValueObject};

/// Non-negative, finite flat discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct FlatAmount(f64);

impl FlatAmount {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("discount amount must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("discount amount must not be negative"));
        }
        Ok(Self(amount))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for FlatAmount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FlatAmount> for f64 {
    fn from(value: FlatAmount) -> Self {
        value.0
    }
}

/// How a subtotal is reduced before payment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountStrategy {
    #[default]
    NoDiscount,
    /// `rate` is a fraction (0.1 = 10% off). Not clamped: a rate above 1
    /// yields a negative total.
    Percentage { rate: f64 },
    /// Flat reduction, floored so the total never drops below zero.
    FixedAmount { amount: FlatAmount },
}

impl DiscountStrategy {
    pub fn percentage(rate: f64) -> Self {
        Self::Percentage { rate }
    }

    /// Rejects negative and non-finite amounts.
    pub fn fixed_amount(amount: f64) -> DomainResult<Self> {
        Ok(Self::FixedAmount {
            amount: FlatAmount::new(amount)?,
        })
    }

    pub fn apply_discount(&self, amount: f64) -> f64 {
        match *self {
            Self::NoDiscount => amount,
            Self::Percentage { rate } => amount * (1.0 - rate),
            Self::FixedAmount { amount: off } => (amount - off.value()).max(0.0),
        }
    }

    /// Short label for logs and receipts.
    pub fn describe(&self) -> String {
        match *self {
            Self::NoDiscount => "no discount".to_string(),
            Self::Percentage { rate } => format!("{:.1}% off", rate * 100.0),
            Self::FixedAmount { amount } => format!("${:.2} off", amount.value()),
        }
    }
}

impl ValueObject for DiscountStrategy {}

/// Binds one [`DiscountStrategy`] for the lifetime of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiscountCalculator {
    strategy: DiscountStrategy,
}

impl DiscountCalculator {
    pub fn new(strategy: DiscountStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> DiscountStrategy {
        self.strategy
    }

    pub fn calculate(&self, amount: f64) -> f64 {
        self.strategy.apply_discount(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fifty_off() -> DiscountStrategy {
        DiscountStrategy::fixed_amount(50.0).unwrap()
    }

    #[test]
    fn percentage_discount_takes_a_fraction_off() {
        let total = DiscountStrategy::percentage(0.1).apply_discount(1100.0);
        assert!((total - 990.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_above_one_goes_negative() {
        let total = DiscountStrategy::percentage(1.5).apply_discount(100.0);
        assert_eq!(total, -50.0);
    }

    #[test]
    fn fixed_amount_discount_subtracts() {
        assert_eq!(fifty_off().apply_discount(400.0), 350.0);
    }

    #[test]
    fn fixed_amount_discount_floors_at_zero() {
        assert_eq!(fifty_off().apply_discount(30.0), 0.0);
    }

    #[test]
    fn fixed_amount_rejects_negative_and_non_finite_amounts() {
        for amount in [-100.0, f64::NAN, f64::INFINITY] {
            match DiscountStrategy::fixed_amount(amount) {
                Err(DomainError::Validation(msg)) if msg.contains("discount amount") => {}
                other => panic!("Expected Validation error for {amount}, got {other:?}"),
            }
        }
    }

    #[test]
    fn deserializing_a_negative_fixed_amount_fails() {
        let err = serde_json::from_str::<DiscountStrategy>(
            r#"{ "kind": "fixed_amount", "amount": -100.0 }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn calculator_delegates_to_bound_strategy() {
        let calculator = DiscountCalculator::new(fifty_off());
        assert_eq!(calculator.calculate(400.0), 350.0);
        assert_eq!(calculator.strategy(), fifty_off());
        assert_eq!(DiscountCalculator::default().calculate(12.5), 12.5);
    }

    #[test]
    fn describe_labels_each_strategy() {
        assert_eq!(DiscountStrategy::NoDiscount.describe(), "no discount");
        assert_eq!(DiscountStrategy::percentage(0.25).describe(), "25.0% off");
        assert_eq!(fifty_off().describe(), "$50.00 off");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(fifty_off()).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "fixed_amount", "amount": 50.0 }));

        let parsed: DiscountStrategy =
            serde_json::from_str(r#"{ "kind": "percentage", "rate": 0.1 }"#).unwrap();
        assert_eq!(parsed, DiscountStrategy::percentage(0.1));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: no discount is the identity.
        #[test]
        fn no_discount_is_identity(x in -1.0e9f64..1.0e9) {
            prop_assert_eq!(DiscountStrategy::NoDiscount.apply_discount(x), x);
        }

        /// Property: percentage discount equals x * (1 - p).
        #[test]
        fn percentage_matches_formula(x in 0.0f64..1.0e9, p in 0.0f64..1.0) {
            let got = DiscountStrategy::percentage(p).apply_discount(x);
            let expected = x * (1.0 - p);
            prop_assert!((got - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }

        /// Property: fixed discount equals max(0, x - a) and is never negative.
        #[test]
        fn fixed_amount_matches_formula(x in 0.0f64..1.0e9, a in 0.0f64..1.0e9) {
            let got = DiscountStrategy::fixed_amount(a).unwrap().apply_discount(x);
            prop_assert_eq!(got, (x - a).max(0.0));
            prop_assert!(got >= 0.0);
        }
    }
}
