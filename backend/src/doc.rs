//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP path from the inbound layer together with
//! the schema wrappers from [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI in debug builds and is printed by the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::roadmap::Welcome;
use crate::inbound::http::schemas::{
    AliasDemoSchema, ErrorCodeSchema, ErrorSchema, ExternalRecordInternalSchema,
    ExternalRecordSchema, RegistrationRequestSchema, StageSchema, UserRecordSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "userlab API",
        description = "User registration with structured validation errors, \
                       aliased partner records and a learning roadmap.",
        license(name = "ISC", url = "https://opensource.org/license/isc-license-txt")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::external::create_external_user,
        crate::inbound::http::external::alias_demo,
        crate::inbound::http::roadmap::welcome,
        crate::inbound::http::roadmap::get_roadmap,
        crate::inbound::http::roadmap::get_stage,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RegistrationRequestSchema,
        UserRecordSchema,
        ExternalRecordSchema,
        ExternalRecordInternalSchema,
        AliasDemoSchema,
        StageSchema,
        Welcome,
    )),
    tags(
        (name = "users", description = "User registration and lookup"),
        (name = "external", description = "Partner records with aliased fields"),
        (name = "roadmap", description = "Learning roadmap"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
