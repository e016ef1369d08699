//! Order processing orchestration.
//!
//! Runs a fixed sequence for one order:
//! 1. subtotal from the order's items
//! 2. total via the discount calculator
//! 3. payment
//! 4. delivery
//! 5. customer notification
//!
//! The order must pass [`Order::checkout`] before step 1, so a missing payment
//! or delivery method fails the call without any side effect. A failing
//! collaborator aborts the steps after it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopflow_core::{DomainResult, Entity, OrderId};

use crate::delivery::DeliveryMethod;
use crate::discount::DiscountCalculator;
use crate::notification::Notification;
use crate::order::Order;
use crate::payment::PaymentMethod;
use crate::ports::{LogisticsClient, MessagingClient, PaymentGateway};

/// Receipt for a successfully processed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedOrder {
    pub order_id: OrderId,
    pub subtotal: f64,
    pub total: f64,
    pub payment_method: PaymentMethod,
    pub delivery_method: DeliveryMethod,
    pub notification: Notification,
    pub message: String,
    pub processed_at: DateTime<Utc>,
}

/// Sequences payment, delivery and notification for an order through the
/// injected collaborators.
pub struct OrderProcessor {
    notification: Notification,
    payments: Box<dyn PaymentGateway>,
    logistics: Box<dyn LogisticsClient>,
    messaging: Box<dyn MessagingClient>,
}

impl OrderProcessor {
    pub fn new(
        notification: Notification,
        payments: impl PaymentGateway + 'static,
        logistics: impl LogisticsClient + 'static,
        messaging: impl MessagingClient + 'static,
    ) -> Self {
        Self {
            notification,
            payments: Box::new(payments),
            logistics: Box::new(logistics),
            messaging: Box::new(messaging),
        }
    }

    pub fn notification(&self) -> Notification {
        self.notification
    }

    #[tracing::instrument(
        name = "process_order",
        skip_all,
        fields(order_id = %order.id(), discount = %calculator.strategy().describe())
    )]
    pub fn process(
        &self,
        order: &Order,
        calculator: &DiscountCalculator,
    ) -> DomainResult<ProcessedOrder> {
        let checkout = order.checkout().inspect_err(|e| {
            tracing::warn!(error = %e, "order is not ready for processing");
        })?;

        let subtotal = order.subtotal();
        let total = calculator.calculate(subtotal);
        tracing::info!(items = order.items().len(), subtotal, total, "order priced");

        let payment_method = checkout.payment_method();
        payment_method
            .process_payment(self.payments.as_ref(), total)
            .inspect_err(|e| tracing::error!(error = %e, %payment_method, "payment failed"))?;
        tracing::info!(%payment_method, total, "payment processed");

        let delivery_method = checkout.delivery_method();
        delivery_method
            .deliver_order(self.logistics.as_ref(), checkout.order())
            .inspect_err(|e| tracing::error!(error = %e, %delivery_method, "delivery failed"))?;
        tracing::info!(%delivery_method, "delivery scheduled");

        let message = format!("Order processed successfully. Total: ${total:.2}");
        let notification = self.notification;
        notification
            .send_notification(self.messaging.as_ref(), &message)
            .inspect_err(|e| tracing::error!(error = %e, %notification, "notification failed"))?;
        tracing::info!(%notification, "customer notified");

        Ok(ProcessedOrder {
            order_id: *order.id(),
            subtotal,
            total,
            payment_method,
            delivery_method,
            notification,
            message,
            processed_at: Utc::now(),
        })
    }
}
