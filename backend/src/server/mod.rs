//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{LogFormat, ServerSettings};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use userlab::Trace;
#[cfg(debug_assertions)]
use userlab::doc::ApiDoc;
use userlab::inbound::http::configure;
use userlab::inbound::http::health::{HealthState, live, ready};
use userlab::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::build_http_state;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and return the running server.
///
/// The health state is marked ready once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let http_state = build_http_state();
    let server_health_state = health_state.clone();
    let bind_addr = settings.bind_addr();

    let server =
        HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
            .bind(bind_addr.clone())?
            .run();

    info!(host = %bind_addr.0, port = bind_addr.1, "listening");
    health_state.mark_ready();
    Ok(server)
}
