//! Translation between raw HTTP input and domain validation.
//!
//! Bodies are accepted as untyped JSON so the domain validators see every
//! field and can report all violations at once. Framework-level extraction
//! failures (malformed JSON, bad path or query parameters) become
//! `invalid_request` errors with the same payload shape as every other error.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{Error, RawInput, Rejection};

/// Map a validation rejection to a `validation_failed` error.
///
/// The violations are listed under `details.violations`.
pub(crate) fn rejection_error(message: &str, rejection: &Rejection) -> Error {
    Error::validation_failed(message).with_details(json!({
        "violations": rejection.violations(),
    }))
}

/// Require the request body to be a JSON object.
pub(crate) fn require_object(body: Value) -> Result<RawInput, Error> {
    match body {
        Value::Object(map) => Ok(map),
        other => Err(
            Error::invalid_request("request body must be a JSON object").with_details(json!({
                "found": crate::domain::ValueKind::of(&other),
            })),
        ),
    }
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting malformed JSON body");
    let message = match err {
        JsonPayloadError::ContentType => "request body must have content type application/json",
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "request body is too large"
        }
        _ => "request body is not valid JSON",
    };
    Error::invalid_request(message).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("invalid path parameter")
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("invalid query parameter")
        .with_details(json!({ "reason": err.to_string() }))
        .into()
}

/// JSON extractor configuration reporting failures as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Path extractor configuration reporting failures as domain errors.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

/// Query extractor configuration reporting failures as domain errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}
