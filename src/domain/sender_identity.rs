use std::convert::TryFrom;

use validator::validate_email;

/// A syntactically valid email address.
///
/// Only the sender side goes through this type: recipient addresses are taken
/// from the admin document as they are and handed to the relay unchecked.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailAddress(String);

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = String;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        if validate_email(email.clone()) {
            Ok(EmailAddress(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }
}

/// The fixed identity every welcome email is sent from.
#[derive(Clone, Debug)]
pub struct SenderIdentity {
    pub address: EmailAddress,
    pub name: String,
}

impl SenderIdentity {
    pub fn new(address: EmailAddress, name: String) -> Self {
        Self { address, name }
    }

    /// `Name <address>`, the way mail headers spell it.
    pub fn mailbox(&self) -> String {
        format!("{} <{}>", self.name, self.address.as_ref())
    }
}
