//! userlab entry-point: loads settings, initialises logging and runs the
//! HTTP server.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{LogFormat, ServerSettings, create_server};
use userlab::inbound::http::health::HealthState;

fn init_tracing(format: LogFormat) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if let Err(error) = result {
        warn!(%error, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let log_format = settings
        .log_format()
        .wrap_err("invalid log format setting")?;
    init_tracing(log_format);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)
        .wrap_err_with(|| format!("failed to bind {}:{}", settings.host(), settings.port()))?;

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated with an error")
}
