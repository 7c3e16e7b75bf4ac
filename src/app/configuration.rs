use std::env;
use std::env::VarError;

use config::{
    Config,
    ConfigError,
    File,
};
use custom_error::custom_error;
use derivative::Derivative;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub trigger: TriggerSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub max_pending_connections: u32,
    pub port: u16,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct TriggerSettings {
    /// Document path pattern the welcome email reacts to, e.g. `admins/{uid}`.
    pub document: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct EmailClientSettings {
    pub sender_email: String,
    pub sender_name: String,
    pub timeout_secs: u64,
    pub relay: RelaySettings,
}

/// Where outgoing mail is submitted. `kind` picks the section that is read;
/// the other one may be left out.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RelaySettings {
    pub kind: RelayKind,
    pub http: Option<HttpRelaySettings>,
    pub smtp: Option<SmtpRelaySettings>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayKind {
    Http,
    Smtp,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct HttpRelaySettings {
    pub base_url: String,
    #[derivative(Debug = "ignore")]
    pub token: String,
}

#[derive(Clone, Derivative, serde::Deserialize)]
#[derivative(Debug)]
pub struct SmtpRelaySettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    #[derivative(Debug = "ignore")]
    pub password: String,
}

impl ApplicationSettings {
    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

custom_error! {
///! Custom error for missing env variable or invalid configuration files.
pub ConfigurationError
    MissingAppEnv{source:VarError} = "`APP_ENVIRONMENT` is not set \
    (possible values: [`local`|`production`]).",
    InvalidConfig{source:ConfigError} = "{source}",
}

/// Load the configuration from the directory: `configuration`.
///
/// It fails if:
/// - the `APP_ENVIRONMENT` env variable is not set
/// - the `configuration/base` file is missing
/// - the `configuration/${APP_ENVIRONMENT}` file is missing
/// - the `configuration/*` files have missing or unexpected fields
///
/// # Examples
///
/// ```rust,no_run
/// use welcome_notifier::app::load_configuration;
///
/// let settings = load_configuration().expect("invalid configuration");
/// println!("{}", settings.application.binding_address());
/// ```
pub fn load_configuration() -> Result<Settings, ConfigurationError> {
    let app_environment = env::var("APP_ENVIRONMENT")?;
    load_configuration_for(&app_environment)
}

/// Same as [`load_configuration`] with the environment given explicitly.
pub fn load_configuration_for(app_environment: &str) -> Result<Settings, ConfigurationError> {
    // Add in settings from environment variables (with a prefix of APP and '__' as
    // separator) E.g. `APP_EMAIL_CLIENT__RELAY__SMTP__PORT=2525` would set
    // `Settings.email_client.relay.smtp.port`
    load_layers(
        app_environment,
        config::Environment::with_prefix("app").separator("__"),
    )
}

fn load_layers(
    app_environment: &str,
    overrides: config::Environment,
) -> Result<Settings, ConfigurationError> {
    let mut config = Config::new();
    config.merge(File::with_name("configuration/base").required(true))?;
    config.merge(File::with_name(&format!("configuration/{}", app_environment)).required(true))?;
    config.merge(overrides)?;

    Ok(config.try_into()?)
}
