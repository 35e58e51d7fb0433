//! Tests for the stored user record.

use super::*;
use crate::domain::validate_registration;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn registration() -> ValidatedRegistration {
    let raw = json!({
        "username": " bob ",
        "email": "b@x.com",
        "password": "password1",
        "confirm_password": "password1",
    });
    validate_registration(raw.as_object().expect("object fixture")).expect("valid registration")
}

#[rstest]
fn build_copies_normalised_fields(registration: ValidatedRegistration, created_at: DateTime<Utc>) {
    let record = UserRecord::build(&registration, UserId::new(1), created_at);
    assert_eq!(record.id(), UserId::new(1));
    assert_eq!(record.username().as_ref(), "bob");
    assert_eq!(record.email().as_ref(), "b@x.com");
    assert_eq!(record.created_at(), created_at);
}

#[rstest]
fn display_name_is_derived_from_username_and_email(
    registration: ValidatedRegistration,
    created_at: DateTime<Utc>,
) {
    let record = UserRecord::build(&registration, UserId::new(1), created_at);
    assert_eq!(record.display_name(), "bob <b@x.com>");
}

#[rstest]
fn build_is_deterministic(registration: ValidatedRegistration, created_at: DateTime<Utc>) {
    let first = UserRecord::build(&registration, UserId::new(4), created_at);
    let second = UserRecord::build(&registration, UserId::new(4), created_at);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).expect("serialise"),
        serde_json::to_vec(&second).expect("serialise")
    );
}

#[rstest]
fn serialises_camel_case_with_display_name(
    registration: ValidatedRegistration,
    created_at: DateTime<Utc>,
) {
    let record = UserRecord::build(&registration, UserId::new(1), created_at);
    let value = serde_json::to_value(&record).expect("serialise record");
    assert_eq!(
        value,
        json!({
            "id": 1,
            "username": "bob",
            "email": "b@x.com",
            "createdAt": "2024-05-01T12:30:00Z",
            "displayName": "bob <b@x.com>",
        })
    );
}

#[rstest]
#[case(0, Some(1))]
#[case(1, Some(2))]
#[case(41, Some(42))]
fn user_id_follows_existing_count(#[case] existing: usize, #[case] expected: Option<u64>) {
    assert_eq!(UserId::after_count(existing).map(UserId::get), expected);
}

#[rstest]
#[case("   ")]
#[case("ab")]
#[case(" a\tb ")]
fn username_rejects_short_values_after_trimming(#[case] raw: &str) {
    assert!(matches!(
        Username::new(raw),
        Err(Violation::FieldConstraint { field, .. }) if field == USERNAME_FIELD
    ));
}

#[rstest]
fn username_counts_characters_not_bytes() {
    let name = "é".repeat(USERNAME_MAX);
    assert!(Username::new(&name).is_ok());
    assert!(Username::new(&format!("{name}é")).is_err());
}
