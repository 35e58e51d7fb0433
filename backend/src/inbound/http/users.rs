//! User registration handlers.
//!
//! ```text
//! POST /users {"username":" bob ","email":"b@x.com","password":"password1","confirm_password":"password1"}
//! GET /users
//! GET /users/1
//! ```

use actix_web::{get, post, web};
use serde_json::Value;

use crate::domain::ports::RegistrationError;
use crate::domain::{Error, UserId, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RegistrationRequestSchema, UserRecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{rejection_error, require_object};

fn map_registration_error(error: RegistrationError) -> Error {
    match error {
        RegistrationError::Rejected(rejection) => {
            rejection_error("registration rejected", &rejection)
        }
        RegistrationError::Storage(err) => Error::internal(format!("registration failed: {err}")),
    }
}

/// Register a user.
///
/// The body is validated as a whole; every broken rule is listed in
/// `details.violations` of the 422 response.
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegistrationRequestSchema,
    responses(
        (status = 200, description = "Registered user", body = UserRecordSchema),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<UserRecord>> {
    let raw = require_object(payload.into_inner())?;
    let record = state
        .registration
        .register(&raw)
        .await
        .map_err(map_registration_error)?;
    Ok(web::Json(record))
}

/// List registered users in registration order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserRecordSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    state.registration.list_users().await.map(web::Json)
}

/// Fetch one registered user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, description = "Sequential user identifier")),
    responses(
        (status = 200, description = "User", body = UserRecordSchema),
        (status = 400, description = "Identifier is not a number", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<u64>,
) -> ApiResult<web::Json<UserRecord>> {
    state
        .registration
        .find_user(UserId::new(id.into_inner()))
        .await
        .map(web::Json)
}
