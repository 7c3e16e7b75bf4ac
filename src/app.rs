pub use configuration::*;
pub use startup::{
    NotifierApp,
    StartupError,
};
pub use telemetry::setup_tracing;

mod configuration;
mod startup;
mod telemetry;
