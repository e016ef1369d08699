use std::io::{self, Stdout, Write};

use shopflow_core::DomainResult;
use shopflow_sales::{PaymentGateway, PaymentMethod};

use crate::console::Narrator;

/// Simulated payment gateway: accepts every charge and narrates it.
#[derive(Debug)]
pub struct ConsolePaymentGateway<W = Stdout> {
    narrator: Narrator<W>,
}

impl ConsolePaymentGateway<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> ConsolePaymentGateway<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            narrator: Narrator::new("payment gateway", out),
        }
    }

    pub fn into_inner(self) -> W {
        self.narrator.into_inner()
    }
}

impl<W: Write> PaymentGateway for ConsolePaymentGateway<W> {
    fn charge(&self, method: PaymentMethod, amount: f64) -> DomainResult<()> {
        tracing::debug!(%method, amount, "charging");
        self.narrator
            .line(&format!("Processing {method} payment of ${amount:.2}"))
    }
}
