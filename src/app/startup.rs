use std::convert::TryFrom;
use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{
    web,
    App,
    HttpServer,
};
use custom_error::custom_error;
use tracing_actix_web::TracingLogger;
use url::Url;

use crate::app::configuration::{
    EmailClientSettings,
    RelayKind,
    Settings,
};
use crate::domain::{
    CreationTrigger,
    DocumentPattern,
    EmailAddress,
    MalformedPattern,
    SenderIdentity,
};
use crate::email_client::{
    EmailClient,
    EmailClientError,
    MailRelay,
    SmtpRelay,
};
use crate::notifier::WelcomeNotifier;
use crate::routes::*;

custom_error! {
///! Custom error for a configuration that cannot be turned into a running app.
pub StartupError
    Bind{source:std::io::Error} = "{source}",
    InvalidBaseUrl{source:url::ParseError} = "Invalid email client base url: {source}",
    InvalidSender{message:String} = "Invalid sender email: {message}",
    InvalidTrigger{source:MalformedPattern} = "Invalid trigger: {source}",
    EmailClient{source:EmailClientError} = "Error creating mail relay: {source}",
    MissingRelaySection{kind:String} = "Relay kind `{kind}` has no `{kind}` section",
}

pub struct NotifierApp {
    pub server: Server,
    pub port: u16,
}

impl NotifierApp {
    /// Build every shared component once, bind the listener and return the
    /// server ready to be awaited. Nothing built here is mutated afterwards.
    pub fn build(configuration: Settings) -> Result<NotifierApp, StartupError> {
        let trigger = CreationTrigger::new(DocumentPattern::try_from(
            configuration.trigger.document.as_str(),
        )?);
        let relay = NotifierApp::mail_relay(&configuration.email_client)?;
        tracing::info!(
            trigger = %trigger.pattern(),
            "Welcome notifier ready"
        );

        let trigger = web::Data::new(trigger);
        let notifier = web::Data::new(WelcomeNotifier::new(relay));

        let tcp_listener = TcpListener::bind(configuration.application.binding_address())?;
        let port = tcp_listener.local_addr()?.port();

        // HttpServer handles all transport level concerns, including the
        // graceful stop on SIGINT/SIGTERM that lets in-flight events finish.
        let server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .route("/health_check", web::get().to(health_check))
                .route(
                    "/triggers/document-created",
                    web::post().to(document_created),
                )
                .app_data(trigger.clone())
                .app_data(notifier.clone())
        })
        .backlog(configuration.application.max_pending_connections)
        .listen(tcp_listener)?
        .run();

        Ok(NotifierApp { server, port })
    }

    pub fn mail_relay(
        client_config: &EmailClientSettings,
    ) -> Result<Arc<dyn MailRelay>, StartupError> {
        let sender = SenderIdentity::new(
            EmailAddress::try_from(client_config.sender_email.clone())
                .map_err(|message| StartupError::InvalidSender { message })?,
            client_config.sender_name.clone(),
        );
        tracing::info!(sender = %sender.mailbox(), "Sending welcome emails as");

        let relay = &client_config.relay;
        let missing_section = || StartupError::MissingRelaySection {
            kind: format!("{:?}", relay.kind).to_lowercase(),
        };
        let relay: Arc<dyn MailRelay> = match relay.kind {
            RelayKind::Http => {
                let http = relay.http.as_ref().ok_or_else(missing_section)?;
                Arc::new(EmailClient::new(
                    Url::parse(&http.base_url)?,
                    sender,
                    http.token.clone(),
                    client_config.timeout_secs,
                )?)
            }
            RelayKind::Smtp => {
                let smtp = relay.smtp.as_ref().ok_or_else(missing_section)?;
                Arc::new(SmtpRelay::new(
                    &smtp.host,
                    smtp.port,
                    smtp.username.clone(),
                    smtp.password.clone(),
                    &sender,
                    client_config.timeout_secs,
                )?)
            }
        };
        Ok(relay)
    }
}
