//! External service adapters for the sales ports.
//!
//! The adapters here simulate the payment gateway, logistics provider and
//! messaging service by narrating each call as one line of text. They write to
//! stdout by default; any `io::Write` can be supplied instead.

mod console;
pub mod logistics;
pub mod messaging;
pub mod payment;

pub use logistics::ConsoleLogistics;
pub use messaging::ConsoleMessaging;
pub use payment::ConsolePaymentGateway;
