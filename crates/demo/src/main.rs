use anyhow::{Context, Result};

use shopflow_integrations::{ConsoleLogistics, ConsoleMessaging, ConsolePaymentGateway};
use shopflow_products::Catalog;
use shopflow_sales::{
    DeliveryMethod, DiscountCalculator, DiscountStrategy, Notification, Order, OrderProcessor,
    PaymentMethod, ProcessedOrder,
};

fn main() -> Result<()> {
    shopflow_observability::init();

    let mut catalog = Catalog::new();
    catalog.add("Laptop", 1000.0)?;
    catalog.add("Mouse", 50.0)?;
    catalog.add("Concert Ticket", 200.0)?;

    println!("=== Order 1: laptop and mouse, 10% off ===");
    let mut order = Order::new();
    order.add_item(catalog.get("Laptop")?, 1)?;
    order.add_item(catalog.get("Mouse")?, 2)?;
    order.set_payment_method(PaymentMethod::PayPal);
    order.set_delivery_method(DeliveryMethod::Courier);
    let receipt = run(
        &order,
        DiscountStrategy::percentage(0.1),
        Notification::Email,
    )
    .context("processing order 1")?;
    summarize(&receipt)?;

    println!();
    println!("=== Order 2: concert tickets, $50 off ===");
    let mut order = Order::new();
    order.add_item(catalog.get("Concert Ticket")?, 2)?;
    order.set_payment_method(PaymentMethod::CreditCard);
    order.set_delivery_method(DeliveryMethod::PickupPoint);
    let receipt = run(
        &order,
        DiscountStrategy::fixed_amount(50.0)?,
        Notification::Sms,
    )
    .context("processing order 2")?;
    summarize(&receipt)?;

    Ok(())
}

fn run(
    order: &Order,
    strategy: DiscountStrategy,
    notification: Notification,
) -> Result<ProcessedOrder> {
    let processor = OrderProcessor::new(
        notification,
        ConsolePaymentGateway::stdout(),
        ConsoleLogistics::stdout(),
        ConsoleMessaging::stdout(),
    );
    let calculator = DiscountCalculator::new(strategy);

    Ok(processor.process(order, &calculator)?)
}

fn summarize(receipt: &ProcessedOrder) -> Result<()> {
    println!(
        "Subtotal: ${:.2}  Total: ${:.2}",
        receipt.subtotal, receipt.total
    );
    tracing::info!(receipt = %serde_json::to_string(receipt)?, "order complete");
    Ok(())
}
