//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerSettings, ServerSettingsError};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use employee_management::Trace;
use employee_management::doc::ApiDoc;
use employee_management::inbound::http::health::{HealthState, live, ready};
use employee_management::inbound::http::json_config;
use employee_management::inbound::http::state::HttpState;
use employee_management::inbound::http::{departments, employees};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    expose_docs: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        expose_docs,
    } = deps;

    let api = web::scope("/api")
        .configure(employees::configure)
        .configure(departments::configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    if expose_docs {
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        app
    }
}

/// Construct the Actix HTTP server for the given settings.
///
/// Readiness flips once the listener is bound.
///
/// # Errors
/// Returns [`std::io::Error`] when the bind address or connection string is
/// invalid, or binding the socket fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let http_state = build_http_state(settings)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to open document store: {e}")))?;
    let http_state = web::Data::new(http_state);
    let expose_docs = settings.expose_docs();
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            expose_docs,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    info!(%bind_addr, expose_docs, "server listening");
    Ok(server)
}
