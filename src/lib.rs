//! The `welcome-notifier` library.
//!
//! Reacts to admin documents being created in the document store by sending
//! the new admin a welcome email through the configured mail relay.

pub mod app;
pub mod domain;
pub mod email_client;
pub mod notifier;
pub mod routes;
