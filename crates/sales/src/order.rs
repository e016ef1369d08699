use std::sync::Arc;

use shopflow_core::{DomainError, DomainResult, Entity, OrderId, ValueObject};
use shopflow_products::Product;

use crate::delivery::DeliveryMethod;
use crate::payment::PaymentMethod;

/// Order item: a shared product and a positive quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    product: Arc<Product>,
    quantity: i64,
}

impl OrderItem {
    pub fn new(product: Arc<Product>, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> f64 {
        self.product.price() * self.quantity as f64
    }
}

impl ValueObject for OrderItem {}

/// Order aggregate: append-only item list plus the payment and delivery
/// behaviors chosen for it.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    items: Vec<OrderItem>,
    payment_method: Option<PaymentMethod>,
    delivery_method: Option<DeliveryMethod>,
}

impl Order {
    pub fn new() -> Self {
        Self::with_id(OrderId::new())
    }

    pub fn with_id(id: OrderId) -> Self {
        Self {
            id,
            items: Vec::new(),
            payment_method: None,
            delivery_method: None,
        }
    }

    /// Append an item. On error the order is left untouched.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: i64) -> DomainResult<()> {
        let item = OrderItem::new(product, quantity)?;
        tracing::debug!(
            order_id = %self.id,
            product = item.product().name(),
            quantity,
            "item added to order"
        );
        self.items.push(item);
        Ok(())
    }

    /// Sum of all line totals, recomputed on every call.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn delivery_method(&self) -> Option<DeliveryMethod> {
        self.delivery_method
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    pub fn set_delivery_method(&mut self, method: DeliveryMethod) {
        self.delivery_method = Some(method);
    }

    /// Freeze the order's behavior slots for processing.
    ///
    /// Fails with [`DomainError::Configuration`] if the payment or delivery
    /// method has not been assigned; payment is checked first.
    pub fn checkout(&self) -> DomainResult<Checkout<'_>> {
        let payment_method = self
            .payment_method
            .ok_or_else(|| DomainError::configuration("payment method not set"))?;
        let delivery_method = self
            .delivery_method
            .ok_or_else(|| DomainError::configuration("delivery method not set"))?;

        Ok(Checkout {
            order: self,
            payment_method,
            delivery_method,
        })
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// An order whose payment and delivery methods are known to be set.
///
/// Only [`Order::checkout`] builds one.
#[derive(Debug, Clone, Copy)]
pub struct Checkout<'a> {
    order: &'a Order,
    payment_method: PaymentMethod,
    delivery_method: DeliveryMethod,
}

impl<'a> Checkout<'a> {
    pub fn order(&self) -> &'a Order {
        self.order
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn delivery_method(&self) -> DeliveryMethod {
        self.delivery_method
    }
}
