use crate::domain::document::Document;

/// The two fields of an admin document the welcome email needs.
///
/// Nothing is validated: a missing or non-scalar field reads as an empty
/// string and the email goes out with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminRecord {
    pub email: String,
    pub name: String,
}

impl AdminRecord {
    const EMAIL_FIELD: &'static str = "email";
    const NAME_FIELD: &'static str = "name";

    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

impl From<&Document> for AdminRecord {
    fn from(document: &Document) -> Self {
        Self {
            email: document
                .field_text(Self::EMAIL_FIELD)
                .unwrap_or_default(),
            name: document.field_text(Self::NAME_FIELD).unwrap_or_default(),
        }
    }
}
