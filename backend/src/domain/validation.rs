//! Rejection taxonomy shared by the input validators.
//!
//! Validators read untyped JSON objects ([`RawInput`]) and report every rule
//! they find broken as a [`Violation`]. A non-empty list of violations forms a
//! [`Rejection`], which is returned as a value rather than raised.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Untyped request body: a JSON object keyed by field name.
pub type RawInput = Map<String, Value>;

/// Canonical name of a validated field, as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Wrap a static field name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Borrow the field name.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Per-field constraint that a value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Constraint {
    /// The field was absent.
    Required,
    /// The value has fewer than `min` characters.
    MinLength {
        /// Smallest accepted length.
        min: usize,
    },
    /// The value has more than `max` characters.
    MaxLength {
        /// Largest accepted length.
        max: usize,
    },
}

/// Rule spanning several fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrossFieldRule {
    /// Password and its confirmation differ.
    #[serde(rename = "PASSWORD_MISMATCH")]
    PasswordMismatch,
}

/// Kind of value a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedKind {
    /// A JSON string.
    String,
    /// A whole number, or a string of decimal digits.
    Integer,
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Integer => "integer",
        })
    }
}

/// Kind of JSON value actually received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl ValueKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// A single broken validation rule.
///
/// `actual` summarises the offending value without echoing it, so secrets
/// never leak into error payloads or logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A field failed one of its own constraints.
    FieldConstraint {
        /// Offending field.
        field: FieldName,
        /// Constraint that failed.
        constraint: Constraint,
        /// Summary of the received value.
        actual: String,
    },
    /// Individually valid fields broke a rule relating them.
    CrossField {
        /// Rule that failed.
        rule: CrossFieldRule,
        /// Fields involved in the rule.
        fields: Vec<FieldName>,
    },
    /// A field held a value of the wrong JSON kind.
    TypeMismatch {
        /// Offending field.
        field: FieldName,
        /// Kind the field must hold.
        expected: ExpectedKind,
        /// Kind actually received.
        found: ValueKind,
    },
}

impl Violation {
    /// The field was absent from the input.
    pub fn required(field: FieldName) -> Self {
        Self::FieldConstraint {
            field,
            constraint: Constraint::Required,
            actual: "missing".to_owned(),
        }
    }

    /// The value has `length` characters, fewer than `min`.
    pub fn too_short(field: FieldName, min: usize, length: usize) -> Self {
        Self::FieldConstraint {
            field,
            constraint: Constraint::MinLength { min },
            actual: describe_length(length),
        }
    }

    /// The value has `length` characters, more than `max`.
    pub fn too_long(field: FieldName, max: usize, length: usize) -> Self {
        Self::FieldConstraint {
            field,
            constraint: Constraint::MaxLength { max },
            actual: describe_length(length),
        }
    }

    /// The field held `value` where `expected` was required.
    pub fn type_mismatch(field: FieldName, expected: ExpectedKind, value: &Value) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            found: ValueKind::of(value),
        }
    }

    /// `rule` failed across `fields`.
    pub fn cross_field(rule: CrossFieldRule, fields: &[FieldName]) -> Self {
        Self::CrossField {
            rule,
            fields: fields.to_vec(),
        }
    }

    /// Field this violation is attributed to, for single-field violations.
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::FieldConstraint { field, .. } | Self::TypeMismatch { field, .. } => Some(*field),
            Self::CrossField { .. } => None,
        }
    }
}

fn describe_length(length: usize) -> String {
    if length == 1 {
        "1 character".to_owned()
    } else {
        format!("{length} characters")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldConstraint {
                field,
                constraint: Constraint::Required,
                ..
            } => write!(f, "{field} is required"),
            Self::FieldConstraint {
                field,
                constraint: Constraint::MinLength { min },
                actual,
            } => write!(f, "{field} must be at least {min} characters, got {actual}"),
            Self::FieldConstraint {
                field,
                constraint: Constraint::MaxLength { max },
                actual,
            } => write!(f, "{field} must be at most {max} characters, got {actual}"),
            Self::CrossField {
                rule: CrossFieldRule::PasswordMismatch,
                ..
            } => write!(f, "passwords do not match"),
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "{field} must be of type {expected}, got {found}"),
        }
    }
}

/// Structured refusal listing every violated rule.
///
/// ## Invariants
/// - Holds at least one violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    violations: Vec<Violation>,
}

impl Rejection {
    /// Build a rejection from collected violations; `None` when there are none.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Rejection carrying a single violation.
    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// All violations, in the order the rules were evaluated.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether the cross-field `rule` is among the violations.
    pub fn violates(&self, rule: CrossFieldRule) -> bool {
        self.violations
            .iter()
            .any(|violation| matches!(violation, Violation::CrossField { rule: r, .. } if *r == rule))
    }

    /// Whether any per-field violation (constraint or type) is present.
    pub fn has_field_violations(&self) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field().is_some())
    }

    /// Violations attributed to `field`.
    pub fn for_field(&self, field: FieldName) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.field() == Some(field))
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

/// Accumulates violations while every field of an input is checked.
#[derive(Debug, Default)]
pub(crate) struct ViolationCollector(Vec<Violation>);

impl ViolationCollector {
    /// Keep the value of a passed check, or record the violation.
    pub(crate) fn check<T>(&mut self, outcome: Result<T, Violation>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(violation) => {
                self.0.push(violation);
                None
            }
        }
    }

    /// Finish collecting.
    ///
    /// Callers reach this only after a failed [`check`](Self::check), so the
    /// list is non-empty; an empty list still yields a rejection naming no
    /// rule rather than a silent success.
    pub(crate) fn into_rejection(self) -> Rejection {
        Rejection {
            violations: self.0,
        }
    }
}

/// Value stored under the first of `keys` present in `raw`.
pub(crate) fn lookup<'a>(raw: &'a RawInput, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| raw.get(*key))
}

/// Read a required string field stored under any of `keys`.
pub(crate) fn read_string<'a>(
    raw: &'a RawInput,
    field: FieldName,
    keys: &[&str],
) -> Result<&'a str, Violation> {
    match lookup(raw, keys) {
        None => Err(Violation::required(field)),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(other) => Err(Violation::type_mismatch(field, ExpectedKind::String, other)),
    }
}

/// Read a required integer field stored under any of `keys`.
///
/// Accepts JSON integers, integral floats such as `1.0`, and strings made of
/// ASCII digits with an optional leading `-`. Everything else, including
/// values outside the `i64` range, is a type mismatch.
pub(crate) fn read_integer(
    raw: &RawInput,
    field: FieldName,
    keys: &[&str],
) -> Result<i64, Violation> {
    let value = lookup(raw, keys).ok_or_else(|| Violation::required(field))?;
    let parsed = match value {
        Value::Number(number) => integer_from_number(number),
        Value::String(text) => integer_from_text(text),
        _ => None,
    };
    parsed.ok_or_else(|| Violation::type_mismatch(field, ExpectedKind::Integer, value))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "bounds and fractional part are checked before the cast"
)]
fn integer_from_number(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    if number.is_u64() {
        return None;
    }
    let float = number.as_f64()?;
    let in_range = float >= i64::MIN as f64 && float < i64::MAX as f64;
    (float.fract() == 0.0 && in_range).then_some(float as i64)
}

fn integer_from_text(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Check the character count of `value` against inclusive bounds.
pub(crate) fn check_length(
    field: FieldName,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), Violation> {
    let length = value.chars().count();
    if length < min {
        return Err(Violation::too_short(field, min, length));
    }
    match max {
        Some(max) if length > max => Err(Violation::too_long(field, max, length)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const FIELD: FieldName = FieldName::new("id");

    fn raw(value: Value) -> RawInput {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[rstest]
    #[case(json!({ "id": 7 }), 7)]
    #[case(json!({ "id": -3 }), -3)]
    #[case(json!({ "id": 1.0 }), 1)]
    #[case(json!({ "id": "42" }), 42)]
    #[case(json!({ "id": "-5" }), -5)]
    fn read_integer_accepts_whole_numbers(#[case] input: Value, #[case] expected: i64) {
        assert_eq!(read_integer(&raw(input), FIELD, &["id"]), Ok(expected));
    }

    #[rstest]
    #[case(json!({ "id": "abc" }), ValueKind::String)]
    #[case(json!({ "id": "" }), ValueKind::String)]
    #[case(json!({ "id": "1.5" }), ValueKind::String)]
    #[case(json!({ "id": " 1" }), ValueKind::String)]
    #[case(json!({ "id": 1.5 }), ValueKind::Number)]
    #[case(json!({ "id": u64::MAX }), ValueKind::Number)]
    #[case(json!({ "id": true }), ValueKind::Boolean)]
    #[case(json!({ "id": null }), ValueKind::Null)]
    #[case(json!({ "id": [1] }), ValueKind::Array)]
    fn read_integer_rejects_other_values(#[case] input: Value, #[case] found: ValueKind) {
        assert_eq!(
            read_integer(&raw(input), FIELD, &["id"]),
            Err(Violation::TypeMismatch {
                field: FIELD,
                expected: ExpectedKind::Integer,
                found,
            })
        );
    }

    #[rstest]
    fn read_integer_reports_missing_field() {
        assert_eq!(
            read_integer(&raw(json!({})), FIELD, &["id"]),
            Err(Violation::required(FIELD))
        );
    }

    #[rstest]
    fn lookup_prefers_earlier_keys() {
        let input = raw(json!({ "b": 2, "a": 1 }));
        assert_eq!(lookup(&input, &["a", "b"]), Some(&json!(1)));
        assert_eq!(lookup(&input, &["c", "b"]), Some(&json!(2)));
        assert_eq!(lookup(&input, &["c"]), None);
    }

    #[rstest]
    #[case("ab", Err(Violation::too_short(FIELD, 3, 2)))]
    #[case("abc", Ok(()))]
    #[case("abcde", Ok(()))]
    #[case("abcdef", Err(Violation::too_long(FIELD, 5, 6)))]
    #[case("äöü", Ok(()))]
    fn check_length_counts_characters(#[case] value: &str, #[case] expected: Result<(), Violation>) {
        assert_eq!(check_length(FIELD, value, 3, Some(5)), expected);
    }

    #[rstest]
    fn violations_serialise_with_kind_tags() {
        let value = serde_json::to_value(vec![
            Violation::too_short(FieldName::new("username"), 3, 1),
            Violation::cross_field(
                CrossFieldRule::PasswordMismatch,
                &[FieldName::new("password"), FieldName::new("passwordConfirmation")],
            ),
            Violation::type_mismatch(FieldName::new("name"), ExpectedKind::String, &json!(5)),
        ])
        .expect("serialise violations");

        assert_eq!(
            value,
            json!([
                {
                    "kind": "field_constraint",
                    "field": "username",
                    "constraint": { "code": "min_length", "min": 3 },
                    "actual": "1 character",
                },
                {
                    "kind": "cross_field",
                    "rule": "PASSWORD_MISMATCH",
                    "fields": ["password", "passwordConfirmation"],
                },
                {
                    "kind": "type_mismatch",
                    "field": "name",
                    "expected": "string",
                    "found": "number",
                },
            ])
        );
    }

    #[rstest]
    fn rejection_requires_at_least_one_violation() {
        assert!(Rejection::from_violations(Vec::new()).is_none());
        let rejection =
            Rejection::from_violations(vec![Violation::required(FIELD)]).expect("non-empty");
        assert_eq!(rejection.to_string(), "id is required");
    }

    #[rstest]
    fn rejection_display_joins_messages() {
        let rejection = Rejection::from_violations(vec![
            Violation::required(FieldName::new("email")),
            Violation::too_long(FieldName::new("username"), 50, 51),
        ])
        .expect("non-empty");
        assert_eq!(
            rejection.to_string(),
            "email is required; username must be at most 50 characters, got 51 characters"
        );
    }
}
