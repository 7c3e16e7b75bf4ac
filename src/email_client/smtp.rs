//! SMTP submission through an authenticated STARTTLS relay, e.g.
//! `smtp.gmail.com:587` with an app password.

use std::time::Duration;

use async_trait::async_trait;
use derivative::Derivative;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    Address,
    AsyncSmtpTransport,
    AsyncTransport,
    Message,
    Tokio1Executor,
};

use crate::domain::{
    OutboundEmail,
    SenderIdentity,
};
use crate::email_client::{
    EmailClientError,
    MailRelay,
};

#[derive(Derivative)]
#[derivative(Debug)]
pub struct SmtpRelay {
    #[derivative(Debug = "ignore")]
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpRelay {
    pub fn new(
        host: &str,
        port: u16,
        username: String,
        password: String,
        sender: &SenderIdentity,
        timeout_secs: u64,
    ) -> Result<Self, EmailClientError> {
        let address: Address = sender.address.as_ref().parse()?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(Duration::from_secs(timeout_secs)))
            .build();

        Ok(Self {
            transport,
            sender: Mailbox::new(Some(sender.name.clone()), address),
        })
    }

    /// Builds the MIME message. An unparsable recipient, the empty one
    /// included, fails here before anything reaches the relay.
    fn message(&self, email: &OutboundEmail) -> Result<Message, EmailClientError> {
        let recipient: Mailbox = email.recipient.parse()?;
        Ok(Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.text_body.clone())?)
    }
}

#[async_trait]
impl MailRelay for SmtpRelay {
    #[tracing::instrument(
        name = "submitting email over smtp",
        skip(self, email),
        fields(custom_id = %email.correlation_id)
    )]
    async fn deliver(&self, email: &OutboundEmail) -> Result<(), EmailClientError> {
        let message = self.message(email)?;
        self.transport.send(message).await?;
        Ok(())
    }
}
