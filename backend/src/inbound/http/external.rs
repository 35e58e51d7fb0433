//! Partner record handlers demonstrating field aliasing.
//!
//! ```text
//! POST /external-users?view=internal {"id":1,"name":"Alice"}
//! GET /users/alias-demo
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::IntoParams;

use crate::domain::{
    ExternalRecord, ExternalRecordView, SerializationView, normalize_external_record,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AliasDemoSchema, ErrorSchema, ExternalRecordSchema};
use crate::inbound::http::validation::{rejection_error, require_object};

/// Query parameters selecting the output view.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ViewParams {
    /// `wire` (`name`) or `internal` (`fullName`); defaults to `wire`.
    #[serde(default)]
    #[param(value_type = Option<String>, example = "internal")]
    pub view: SerializationView,
}

/// Both views of the same record, side by side.
#[derive(Debug, Serialize)]
pub struct AliasDemo<'a> {
    /// Serialised with partner keys.
    pub by_alias: ExternalRecordView<'a>,
    /// Serialised with internal keys.
    pub regular: ExternalRecordView<'a>,
}

/// Validate a partner record and echo it in the requested view.
#[utoipa::path(
    post,
    path = "/external-users",
    params(ViewParams),
    request_body = ExternalRecordSchema,
    responses(
        (status = 200, description = "Normalised record", body = ExternalRecordSchema),
        (status = 400, description = "Malformed body or unknown view", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema)
    ),
    tags = ["external"],
    operation_id = "createExternalUser"
)]
#[post("/external-users")]
pub async fn create_external_user(
    params: web::Query<ViewParams>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let raw = require_object(payload.into_inner())?;
    let record = normalize_external_record(&raw)
        .map_err(|rejection| rejection_error("external record rejected", &rejection))?;
    Ok(HttpResponse::Ok().json(record.to_view(params.view)))
}

/// Show one record serialised in both views.
#[utoipa::path(
    get,
    path = "/users/alias-demo",
    responses((status = 200, description = "Wire and internal views", body = AliasDemoSchema)),
    tags = ["external"],
    operation_id = "aliasDemo"
)]
#[get("/users/alias-demo")]
pub async fn alias_demo() -> HttpResponse {
    let record = ExternalRecord::new(1, "Bob");
    HttpResponse::Ok().json(AliasDemo {
        by_alias: record.to_view(SerializationView::Wire),
        regular: record.to_view(SerializationView::Internal),
    })
}
