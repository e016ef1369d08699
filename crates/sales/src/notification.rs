use serde::{Deserialize, Serialize};

use shopflow_core::DomainResult;

use crate::ports::MessagingClient;

/// Channel used to tell the customer their order went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    Email,
    Sms,
}

impl Notification {
    pub fn label(&self) -> &'static str {
        match self {
            Notification::Email => "email",
            Notification::Sms => "SMS",
        }
    }

    pub fn send_notification(&self, messaging: &dyn MessagingClient, message: &str) -> DomainResult<()> {
        messaging.send(*self, message)
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopflow_core::DomainError;

    struct UnreachableMessaging;

    impl MessagingClient for UnreachableMessaging {
        fn send(&self, channel: Notification, _message: &str) -> DomainResult<()> {
            Err(DomainError::collaborator(
                "messaging",
                format!("{channel} provider unreachable"),
            ))
        }
    }

    #[test]
    fn client_failures_are_propagated() {
        let err = Notification::Sms
            .send_notification(&UnreachableMessaging, "hello")
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::collaborator("messaging", "SMS provider unreachable")
        );
    }
}
