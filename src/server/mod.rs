//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::inbound::http::{HealthState, HttpState, json_config, path_config};

/// Assemble the application with all routes, extractors, and state.
///
/// Exposed so integration tests can drive the real route table against a
/// repository double.
pub fn build_app(
    state: web::Data<HttpState>,
    health: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[cfg_attr(not(debug_assertions), allow(unused_mut))]
    let mut app = App::new()
        .app_data(state)
        .app_data(health)
        .app_data(json_config())
        .app_data(path_config())
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Bind the HTTP listener and return the running server handle.
///
/// The caller flips readiness after this returns so probes only report 200
/// once the socket is bound.
pub fn run(config: ServerConfig, health: web::Data<HealthState>) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState::new(config.repository()));
    let server = HttpServer::new(move || build_app(state.clone(), health.clone()))
        .bind(config.bind_addr())?
        .run();
    Ok(server)
}
