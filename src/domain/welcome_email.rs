use crate::domain::AdminRecord;

/// A message ready to be handed to a mail relay. The sender is not part of it:
/// every relay sends from its own configured identity.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundEmail {
    pub recipient: String,
    pub subject: String,
    pub text_body: String,
    /// Ties the message back to the document that caused it.
    pub correlation_id: String,
}

/// The fixed welcome message for a newly registered admin.
pub struct WelcomeEmail;

impl WelcomeEmail {
    pub const PRODUCT_NAME: &'static str = "BaskuBN";
    pub const SUBJECT: &'static str = "Welcome to BaskuBN";

    pub fn body(name: &str) -> String {
        format!(
            "Hi {}, you have registered as a new admin user for {}. We're glad to have you \
             onboard.",
            name,
            Self::PRODUCT_NAME
        )
    }

    pub fn compose(document_id: &str, admin: &AdminRecord) -> OutboundEmail {
        OutboundEmail {
            recipient: admin.email.clone(),
            subject: Self::SUBJECT.to_string(),
            text_body: Self::body(&admin.name),
            correlation_id: document_id.to_string(),
        }
    }
}
