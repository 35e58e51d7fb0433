//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`. The wrappers here mirror their JSON
//! shape and are registered under the domain type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request could not be parsed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The request parsed but broke validation rules.
    #[schema(rename = "validation_failed")]
    ValidationFailed,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "validation_failed")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "registration rejected")]
    message: String,
    /// Trace identifier of the failed request.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured details; `{"violations": [...]}` for validation failures.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for a registration body.
///
/// The confirmation is also accepted as `password_confirmation`,
/// `confirmPassword` or `confirm_password`.
#[derive(ToSchema)]
#[schema(as = RegistrationRequest, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RegistrationRequestSchema {
    /// 3 to 50 characters after trimming.
    #[schema(example = "bob")]
    username: String,
    /// Stored trimmed; the format is not checked.
    #[schema(example = "b@x.com")]
    email: String,
    /// At least 8 characters.
    #[schema(example = "password1")]
    password: String,
    /// Must equal `password`.
    #[schema(example = "password1")]
    password_confirmation: String,
}

/// OpenAPI schema for [`crate::domain::UserRecord`].
#[derive(ToSchema)]
#[schema(as = UserRecord, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRecordSchema {
    /// Sequential identifier starting at 1.
    #[schema(example = 1)]
    id: u64,
    /// Trimmed username.
    #[schema(example = "bob")]
    username: String,
    /// Email address.
    #[schema(example = "b@x.com")]
    email: String,
    /// Creation time (RFC 3339, UTC).
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    /// `"{username} <{email}>"`.
    #[schema(example = "bob <b@x.com>")]
    display_name: String,
}

/// OpenAPI schema for [`crate::domain::ExternalRecord`] in its wire view.
///
/// Input may use `fullName` instead of `name`.
#[derive(ToSchema)]
#[schema(as = ExternalRecord)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExternalRecordSchema {
    /// Partner identifier; numeric strings are accepted on input.
    #[schema(example = 1)]
    id: i64,
    /// Full name.
    #[schema(example = "Alice")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::ExternalRecord`] in its internal view.
#[derive(ToSchema)]
#[schema(as = ExternalRecordInternal, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExternalRecordInternalSchema {
    /// Partner identifier.
    #[schema(example = 1)]
    id: i64,
    /// Full name.
    #[schema(example = "Alice")]
    full_name: String,
}

/// OpenAPI schema for the alias demonstration payload.
#[derive(ToSchema)]
#[schema(as = AliasDemo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AliasDemoSchema {
    /// Wire view.
    by_alias: ExternalRecordSchema,
    /// Internal view.
    regular: ExternalRecordInternalSchema,
}

/// OpenAPI schema for [`crate::domain::Stage`].
#[derive(ToSchema)]
#[schema(as = Stage)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StageSchema {
    /// Stage title.
    #[schema(example = "Quick Start")]
    name: String,
    /// What the stage is for.
    description: String,
    /// Suggested time to spend.
    #[schema(example = "1 week")]
    duration: String,
    /// Topics in study order.
    topics: Vec<String>,
}
