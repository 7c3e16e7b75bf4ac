use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{
    AdminRecord,
    DocumentEvent,
    DocumentPattern,
};

/// Event types announcing that a document was created, in the legacy and in
/// the CloudEvents naming.
const CREATE_EVENT_TYPES: [&str; 2] = [
    "providers/cloud.firestore/eventTypes/document.create",
    "google.cloud.firestore.document.v1.created",
];

/// Why an event was not handed to the notifier.
#[derive(Debug, Error, PartialEq)]
pub enum Rejection {
    #[error("`{event_type}` is not a document creation")]
    NotACreation { event_type: String },
    #[error("the event carries no created document")]
    MissingDocument,
    #[error("document `{path}` does not match `{pattern}`")]
    PathMismatch { path: String, pattern: String },
}

/// A document creation that passed the trigger.
#[derive(Debug)]
pub struct CreatedDocument {
    pub document_id: String,
    pub bindings: HashMap<String, String>,
    pub record: AdminRecord,
}

/// Filters incoming document events down to creations under one path pattern.
#[derive(Clone, Debug)]
pub struct CreationTrigger {
    pattern: DocumentPattern,
}

impl CreationTrigger {
    pub fn new(pattern: DocumentPattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &DocumentPattern {
        &self.pattern
    }

    pub fn accept(&self, event: &DocumentEvent) -> Result<CreatedDocument, Rejection> {
        let event_type = event.context.event_type.as_str();
        if !CREATE_EVENT_TYPES.contains(&event_type) {
            return Err(Rejection::NotACreation {
                event_type: event_type.to_string(),
            });
        }

        let document = event
            .data
            .value
            .as_ref()
            .ok_or(Rejection::MissingDocument)?;
        let path = document.relative_path();
        let bindings = self
            .pattern
            .matches(path)
            .ok_or_else(|| Rejection::PathMismatch {
                path: path.to_string(),
                pattern: self.pattern.to_string(),
            })?;

        Ok(CreatedDocument {
            document_id: document.id().to_string(),
            bindings,
            record: AdminRecord::from(document),
        })
    }
}
