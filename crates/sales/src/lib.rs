//! Sales domain module.
//!
//! Orders, the interchangeable behaviors applied to them (discount, payment,
//! delivery, notification) and the `OrderProcessor` that sequences them. The
//! external systems behind payment, delivery and notification are reached only
//! through the narrow traits in [`ports`].

pub mod delivery;
pub mod discount;
pub mod notification;
pub mod order;
pub mod payment;
pub mod ports;
pub mod processor;

pub use delivery::DeliveryMethod;
pub use discount::{DiscountCalculator, DiscountStrategy, FlatAmount};
pub use notification::Notification;
pub use order::{Checkout, Order, OrderItem};
pub use payment::PaymentMethod;
pub use ports::{LogisticsClient, MessagingClient, PaymentGateway};
pub use processor::{OrderProcessor, ProcessedOrder};
