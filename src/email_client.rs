pub use client::EmailClient;
pub use errors::EmailClientError;
pub use relay::MailRelay;
pub use smtp::SmtpRelay;

mod client;
mod errors;
mod relay;
mod request;
mod smtp;
