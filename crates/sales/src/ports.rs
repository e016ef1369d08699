//! Narrow interfaces to the external systems an order touches.
//!
//! The sales domain defines these; adapters (simulated or real) live outside
//! the crate and are injected into [`OrderProcessor`](crate::OrderProcessor).
//! Implementations report failures as [`DomainError::Collaborator`](shopflow_core::DomainError::Collaborator).

use shopflow_core::DomainResult;

use crate::delivery::DeliveryMethod;
use crate::notification::Notification;
use crate::order::Order;
use crate::payment::PaymentMethod;

/// Payment gateway client.
pub trait PaymentGateway {
    fn charge(&self, method: PaymentMethod, amount: f64) -> DomainResult<()>;
}

/// Delivery / logistics client.
pub trait LogisticsClient {
    fn dispatch(&self, method: DeliveryMethod, order: &Order) -> DomainResult<()>;
}

/// Message dispatch client (email, SMS).
pub trait MessagingClient {
    fn send(&self, channel: Notification, message: &str) -> DomainResult<()>;
}
