pub use admin_record::AdminRecord;
pub use document::{
    Document,
    DocumentChange,
    DocumentEvent,
    EventContext,
    FieldValue,
};
pub use errors::MalformedPattern;
pub use pattern::DocumentPattern;
pub use sender_identity::{
    EmailAddress,
    SenderIdentity,
};
pub use trigger::{
    CreatedDocument,
    CreationTrigger,
    Rejection,
};
pub use welcome_email::{
    OutboundEmail,
    WelcomeEmail,
};

mod admin_record;
mod document;
mod errors;
mod pattern;
mod sender_identity;
mod trigger;
mod welcome_email;
