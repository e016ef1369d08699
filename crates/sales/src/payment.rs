use serde::{Deserialize, Serialize};

use shopflow_core::DomainResult;

use crate::ports::PaymentGateway;

/// How an order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "bank transfer",
        }
    }

    /// Charge `amount` through the gateway using this method.
    pub fn process_payment(&self, gateway: &dyn PaymentGateway, amount: f64) -> DomainResult<()> {
        gateway.charge(*self, amount)
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CapturingGateway {
        charges: RefCell<Vec<(PaymentMethod, f64)>>,
    }

    impl PaymentGateway for CapturingGateway {
        fn charge(&self, method: PaymentMethod, amount: f64) -> DomainResult<()> {
            self.charges.borrow_mut().push((method, amount));
            Ok(())
        }
    }

    #[test]
    fn each_method_charges_under_its_own_name() {
        let gateway = CapturingGateway::default();
        for method in [
            PaymentMethod::CreditCard,
            PaymentMethod::PayPal,
            PaymentMethod::BankTransfer,
        ] {
            method.process_payment(&gateway, 12.5).unwrap();
        }

        assert_eq!(
            *gateway.charges.borrow(),
            vec![
                (PaymentMethod::CreditCard, 12.5),
                (PaymentMethod::PayPal, 12.5),
                (PaymentMethod::BankTransfer, 12.5),
            ]
        );
    }

    #[test]
    fn labels_and_serde_names() {
        assert_eq!(PaymentMethod::PayPal.to_string(), "PayPal");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::PayPal).unwrap(),
            "\"paypal\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"credit_card\""
        );
    }
}
