use anyhow::Context;

use welcome_notifier::app::{
    load_configuration,
    setup_tracing,
    NotifierApp,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("welcome-notifier".into(), "info".into());

    let configuration = load_configuration().context("Failed to load configuration")?;
    let app = NotifierApp::build(configuration).context("Failed to start the notifier")?;
    tracing::info!(port = app.port, "Listening for document events");

    app.server.await.context("Server stopped unexpectedly")
}
