use serde::{Deserialize, Serialize};

use shopflow_core::DomainResult;

use crate::order::Order;
use crate::ports::LogisticsClient;

/// How an order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Courier,
    Post,
    PickupPoint,
}

impl DeliveryMethod {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryMethod::Courier => "courier",
            DeliveryMethod::Post => "post",
            DeliveryMethod::PickupPoint => "pickup point",
        }
    }

    /// Hand the whole order to logistics; carriers may inspect its items.
    pub fn deliver_order(&self, logistics: &dyn LogisticsClient, order: &Order) -> DomainResult<()> {
        logistics.dispatch(*self, order)
    }
}

impl core::fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
