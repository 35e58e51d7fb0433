//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod external;
pub mod health;
pub mod roadmap;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register extractor configuration and every API route.
///
/// Health probes are registered by the server alongside their own state.
/// `/users/alias-demo` is registered before `/users/{id}` so the literal path
/// wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .app_data(validation::query_config())
        .service(roadmap::welcome)
        .service(roadmap::get_roadmap)
        .service(roadmap::get_stage)
        .service(external::alias_demo)
        .service(external::create_external_user)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user);
}
