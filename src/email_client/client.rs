use std::time::Duration;

use async_trait::async_trait;
use derivative::Derivative;
use reqwest::{
    Client,
    Url,
};

use crate::domain::{
    OutboundEmail,
    SenderIdentity,
};
use crate::email_client::request::EmailRequest;
use crate::email_client::{
    EmailClientError,
    MailRelay,
};

/// Client of an HTTP mail API (`POST {base_url}/send`).
#[derive(Derivative)]
#[derivative(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    sender: SenderIdentity,
    #[derivative(Debug = "ignore")]
    token: String,
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        sender: SenderIdentity,
        token: String,
        timeout_secs: u64,
    ) -> Result<Self, EmailClientError> {
        let mut base_url = base_url;
        // `join` replaces the last segment unless the path ends with `/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            base_url,
            sender,
            token,
        })
    }

    #[tracing::instrument(
        name = "submitting email to the mail api",
        skip(self, email),
        fields(custom_id = %email.correlation_id)
    )]
    pub async fn send_email(&self, email: &OutboundEmail) -> Result<(), EmailClientError> {
        let response = self
            .http_client
            .post(self.base_url.join("send")?)
            .header("Content-Type", "application/json")
            .header("Authorization", self.token.as_str())
            .json(&EmailRequest::new(
                self.sender.address.as_ref(),
                &self.sender.name,
                &email.recipient,
                &email.subject,
                &email.text_body,
                &email.correlation_id,
            ))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmailClientError::ErrorResponse {
                code: status.as_u16(),
                canonical_reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl MailRelay for EmailClient {
    async fn deliver(&self, email: &OutboundEmail) -> Result<(), EmailClientError> {
        self.send_email(email).await
    }
}
