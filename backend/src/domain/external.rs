//! Externally sourced record whose full name travels under two keys.
//!
//! Partner systems send the full name as `name`; internally it is known as
//! `fullName`. The record stores one canonical value and the key is chosen
//! when it is serialised, through [`SerializationView`].

use serde::{Deserialize, Serialize};

use super::validation::{
    FieldName, RawInput, Rejection, ViolationCollector, read_integer, read_string,
};

/// Field name reported for identifier violations.
pub const EXTERNAL_ID_FIELD: FieldName = FieldName::new("id");
/// Field name reported for full-name violations.
pub const EXTERNAL_NAME_FIELD: FieldName = FieldName::new("name");

/// Keys accepted for the full name, in order of precedence.
const NAME_KEYS: &[&str] = &["name", "fullName"];

/// Key naming used when an [`ExternalRecord`] is serialised.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationView {
    /// Partner-facing keys: `{"id", "name"}`.
    #[default]
    Wire,
    /// Internal keys: `{"id", "fullName"}`.
    Internal,
}

/// Record imported from a partner system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRecord {
    id: i64,
    full_name: String,
}

impl ExternalRecord {
    /// Build a record directly from trusted values.
    pub fn new(id: i64, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }

    /// Partner identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Canonical full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Borrow the record in the given serialisation view.
    ///
    /// # Examples
    /// ```
    /// use userlab::domain::{ExternalRecord, SerializationView};
    ///
    /// let record = ExternalRecord::new(1, "Bob");
    /// let wire = serde_json::to_string(&record.to_view(SerializationView::Wire)).unwrap();
    /// assert_eq!(wire, r#"{"id":1,"name":"Bob"}"#);
    /// ```
    pub fn to_view(&self, view: SerializationView) -> ExternalRecordView<'_> {
        match view {
            SerializationView::Wire => ExternalRecordView::Wire {
                id: self.id,
                name: &self.full_name,
            },
            SerializationView::Internal => ExternalRecordView::Internal {
                id: self.id,
                full_name: &self.full_name,
            },
        }
    }
}

/// Serialisable projection of an [`ExternalRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExternalRecordView<'a> {
    /// `{"id", "name"}`.
    Wire {
        /// Partner identifier.
        id: i64,
        /// Full name under its partner key.
        name: &'a str,
    },
    /// `{"id", "fullName"}`.
    Internal {
        /// Partner identifier.
        id: i64,
        /// Full name under its internal key.
        #[serde(rename = "fullName")]
        full_name: &'a str,
    },
}

/// Validate a raw partner payload.
///
/// The full name is read from `name`, falling back to `fullName`. Every
/// violation is collected before returning.
pub fn normalize_external_record(raw: &RawInput) -> Result<ExternalRecord, Rejection> {
    let mut violations = ViolationCollector::default();
    let id = violations.check(read_integer(raw, EXTERNAL_ID_FIELD, &["id"]));
    let full_name = violations.check(read_string(raw, EXTERNAL_NAME_FIELD, NAME_KEYS));

    match (id, full_name) {
        (Some(id), Some(full_name)) => Ok(ExternalRecord::new(id, full_name)),
        _ => Err(violations.into_rejection()),
    }
}
