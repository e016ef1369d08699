use std::io::{self, Stdout, Write};

use shopflow_core::{DomainResult, Entity};
use shopflow_sales::{DeliveryMethod, LogisticsClient, Order};

use crate::console::Narrator;

/// Simulated logistics provider.
#[derive(Debug)]
pub struct ConsoleLogistics<W = Stdout> {
    narrator: Narrator<W>,
}

impl ConsoleLogistics<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> ConsoleLogistics<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            narrator: Narrator::new("logistics", out),
        }
    }

    pub fn into_inner(self) -> W {
        self.narrator.into_inner()
    }
}

impl<W: Write> LogisticsClient for ConsoleLogistics<W> {
    fn dispatch(&self, method: DeliveryMethod, order: &Order) -> DomainResult<()> {
        let units: i64 = order.items().iter().map(|i| i.quantity()).sum();
        tracing::debug!(order_id = %order.id(), %method, units, "dispatching");

        let line = match method {
            DeliveryMethod::Courier => format!("Delivering {units} item(s) by courier"),
            DeliveryMethod::Post => format!("Shipping {units} item(s) by post"),
            DeliveryMethod::PickupPoint => {
                format!("{units} item(s) ready for collection at the pickup point")
            }
        };
        self.narrator.line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use shopflow_products::Product;

    #[test]
    fn narration_counts_units_across_items() {
        let mut order = Order::new();
        order
            .add_item(Arc::new(Product::new("Laptop", 1000.0).unwrap()), 1)
            .unwrap();
        order
            .add_item(Arc::new(Product::new("Mouse", 50.0).unwrap()), 2)
            .unwrap();

        let logistics = ConsoleLogistics::with_writer(Vec::new());
        logistics.dispatch(DeliveryMethod::Courier, &order).unwrap();
        logistics.dispatch(DeliveryMethod::Post, &order).unwrap();
        logistics.dispatch(DeliveryMethod::PickupPoint, &order).unwrap();

        assert_eq!(
            String::from_utf8(logistics.into_inner()).unwrap(),
            "Delivering 3 item(s) by courier\n\
             Shipping 3 item(s) by post\n\
             3 item(s) ready for collection at the pickup point\n"
        );
    }
}
