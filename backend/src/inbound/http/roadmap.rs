//! Welcome and learning roadmap handlers.
//!
//! ```text
//! GET /
//! GET /roadmap
//! GET /roadmap/1
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Stage;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, StageSchema};
use crate::inbound::http::state::HttpState;

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str =
    "Welcome to your learning journey! Visit /docs to explore the API.";

/// Root endpoint payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct Welcome {
    /// Greeting text.
    pub message: &'static str,
}

/// Greet the caller.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = Welcome)),
    tags = ["roadmap"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> web::Json<Welcome> {
    web::Json(Welcome {
        message: WELCOME_MESSAGE,
    })
}

/// List every roadmap stage in order.
#[utoipa::path(
    get,
    path = "/roadmap",
    responses(
        (status = 200, description = "Roadmap stages", body = [StageSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["roadmap"],
    operation_id = "getRoadmap"
)]
#[get("/roadmap")]
pub async fn get_roadmap(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Stage>>> {
    state.roadmap.stages().await.map(web::Json)
}

/// Fetch the stage at a zero-based position.
#[utoipa::path(
    get,
    path = "/roadmap/{stage_id}",
    params(("stage_id" = i64, Path, description = "Zero-based stage index")),
    responses(
        (status = 200, description = "Roadmap stage", body = StageSchema),
        (status = 400, description = "Index is not a number", body = ErrorSchema),
        (status = 404, description = "No stage at that index", body = ErrorSchema)
    ),
    tags = ["roadmap"],
    operation_id = "getStage"
)]
#[get("/roadmap/{stage_id}")]
pub async fn get_stage(
    state: web::Data<HttpState>,
    stage_id: web::Path<i64>,
) -> ApiResult<web::Json<Stage>> {
    state.roadmap.stage(stage_id.into_inner()).await.map(web::Json)
}
