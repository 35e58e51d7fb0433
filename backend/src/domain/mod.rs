//! Domain primitives, validation rules and services.
//!
//! Purpose: hold every rule about what a valid registration or partner record
//! is, independent of HTTP and storage. Validators take an untyped JSON object
//! and return either a typed value or a [`Rejection`] listing every broken
//! rule.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable error identifiers.
//! - validate_registration / ValidatedRegistration / UserRecord: user
//!   registration and the stored record.
//! - normalize_external_record / ExternalRecord / SerializationView: aliased
//!   partner records.
//! - Stage / learning_roadmap: the fixed learning roadmap.
//! - RegistrationService: implementation of the registration driving port.

pub mod error;
pub mod external;
pub mod ports;
pub mod registration;
pub mod registration_service;
pub mod roadmap;
pub mod trace_id;
pub mod user;
pub mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::external::{
    EXTERNAL_ID_FIELD, EXTERNAL_NAME_FIELD, ExternalRecord, ExternalRecordView,
    SerializationView, normalize_external_record,
};
pub use self::registration::{
    EMAIL_FIELD, PASSWORD_CONFIRMATION_FIELD, PASSWORD_FIELD, PASSWORD_MIN, Password,
    ValidatedRegistration, validate_registration,
};
pub use self::registration_service::RegistrationService;
pub use self::roadmap::{Stage, learning_roadmap, roadmap_stage};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EmailAddress, USERNAME_FIELD, USERNAME_MAX, USERNAME_MIN, UserId, UserRecord, Username,
};
pub use self::validation::{
    Constraint, CrossFieldRule, ExpectedKind, FieldName, RawInput, Rejection, ValueKind,
    Violation,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use userlab::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nothing here"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
