use std::io::{self, Stdout, Write};

use shopflow_core::DomainResult;
use shopflow_sales::{MessagingClient, Notification};

use crate::console::Narrator;

/// Simulated email/SMS provider.
#[derive(Debug)]
pub struct ConsoleMessaging<W = Stdout> {
    narrator: Narrator<W>,
}

impl ConsoleMessaging<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> ConsoleMessaging<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            narrator: Narrator::new("messaging", out),
        }
    }

    pub fn into_inner(self) -> W {
        self.narrator.into_inner()
    }
}

impl<W: Write> MessagingClient for ConsoleMessaging<W> {
    fn send(&self, channel: Notification, message: &str) -> DomainResult<()> {
        tracing::debug!(%channel, "sending notification");
        self.narrator.line(&format!("Sending {channel}: {message}"))
    }
}
