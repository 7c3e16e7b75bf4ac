use std::sync::Arc;

use crate::domain::{
    AdminRecord,
    WelcomeEmail,
};
use crate::email_client::{
    EmailClientError,
    MailRelay,
};

/// How a welcome email attempt ended. Both outcomes are final: a failed
/// delivery is logged and dropped, never retried.
#[derive(Debug)]
pub enum Delivery {
    Sent { recipient: String },
    Failed { error: EmailClientError },
}

/// Sends the welcome email for every admin document created in the store.
#[derive(Clone)]
pub struct WelcomeNotifier {
    relay: Arc<dyn MailRelay>,
}

impl WelcomeNotifier {
    pub fn new(relay: Arc<dyn MailRelay>) -> Self {
        Self { relay }
    }

    /// Makes exactly one delivery attempt. Relay failures end up in the log
    /// and in the returned [`Delivery`], they are never raised to the caller.
    #[tracing::instrument(
        name = "sending welcome email",
        skip(self, admin),
        fields(uid = %uid)
    )]
    pub async fn on_admin_created(&self, uid: &str, admin: &AdminRecord) -> Delivery {
        let email = WelcomeEmail::compose(uid, admin);

        match self.relay.deliver(&email).await {
            Ok(()) => {
                tracing::info!(recipient = %email.recipient, "Welcome email sent");
                Delivery::Sent {
                    recipient: email.recipient,
                }
            }
            Err(error) => {
                tracing::error!(error = %error, "Error sending welcome email");
                Delivery::Failed { error }
            }
        }
    }
}
