use async_trait::async_trait;

use crate::domain::OutboundEmail;
use crate::email_client::EmailClientError;

/// An outbound mail service that accepts one message per call.
///
/// Implementations are built once at startup and shared read-only by every
/// request worker.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn deliver(&self, email: &OutboundEmail) -> Result<(), EmailClientError>;
}
