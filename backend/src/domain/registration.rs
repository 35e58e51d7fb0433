//! Registration input validation.
//!
//! ```text
//! {"username":" bob ","email":"b@x.com","password":"password1","confirm_password":"password1"}
//! ```
//!
//! Every field is checked before the password confirmation is compared, so a
//! rejection lists all per-field problems at once, and a `PASSWORD_MISMATCH`
//! only ever appears on its own.

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use super::user::{EmailAddress, USERNAME_FIELD, Username};
use super::validation::{
    CrossFieldRule, FieldName, RawInput, Rejection, Violation, ViolationCollector, check_length,
    read_string,
};

/// Field name reported for email violations.
pub const EMAIL_FIELD: FieldName = FieldName::new("email");
/// Field name reported for password violations.
pub const PASSWORD_FIELD: FieldName = FieldName::new("password");
/// Field name reported for password confirmation violations.
pub const PASSWORD_CONFIRMATION_FIELD: FieldName = FieldName::new("passwordConfirmation");
/// Minimum password length.
pub const PASSWORD_MIN: usize = 8;

/// Keys accepted for the password confirmation, in order of precedence.
const CONFIRMATION_KEYS: &[&str] = &[
    "passwordConfirmation",
    "password_confirmation",
    "confirmPassword",
    "confirm_password",
];

/// Keys the server owns; caller-supplied values are dropped.
const SERVER_MANAGED_KEYS: &[&str] = &[
    "id",
    "displayName",
    "display_name",
    "createdAt",
    "created_at",
];

/// Password trimmed of surrounding whitespace, wiped on drop and redacted
/// from `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    fn new(field: FieldName, raw: &str) -> Result<Self, Violation> {
        let trimmed = raw.trim();
        check_length(field, trimmed, PASSWORD_MIN, None)?;
        Ok(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Plain-text password.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Registration input that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    username: Username,
    email: EmailAddress,
    password: Password,
}

impl ValidatedRegistration {
    /// Trimmed username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Trimmed email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Confirmed password.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Validate a raw registration body.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use userlab::domain::validate_registration;
///
/// let raw = json!({
///     "username": "  ada ",
///     "email": "ada@example.com",
///     "password": "analytical",
///     "passwordConfirmation": "analytical",
/// });
/// let registration = validate_registration(raw.as_object().unwrap()).unwrap();
/// assert_eq!(registration.username().as_ref(), "ada");
/// ```
pub fn validate_registration(raw: &RawInput) -> Result<ValidatedRegistration, Rejection> {
    for key in SERVER_MANAGED_KEYS {
        if raw.contains_key(*key) {
            debug!(field = *key, "ignoring caller-supplied server-managed field");
        }
    }

    let mut violations = ViolationCollector::default();
    let username = violations
        .check(read_string(raw, USERNAME_FIELD, &["username"]))
        .and_then(|text| violations.check(Username::new(text)));
    let email = violations
        .check(read_string(raw, EMAIL_FIELD, &["email"]))
        .map(EmailAddress::new);
    let password = violations
        .check(read_string(raw, PASSWORD_FIELD, &["password"]))
        .and_then(|text| violations.check(Password::new(PASSWORD_FIELD, text)));
    let confirmation = violations
        .check(read_string(
            raw,
            PASSWORD_CONFIRMATION_FIELD,
            CONFIRMATION_KEYS,
        ))
        .and_then(|text| violations.check(Password::new(PASSWORD_CONFIRMATION_FIELD, text)));

    let (Some(username), Some(email), Some(password), Some(confirmation)) =
        (username, email, password, confirmation)
    else {
        return Err(violations.into_rejection());
    };

    if password != confirmation {
        return Err(Rejection::single(Violation::cross_field(
            CrossFieldRule::PasswordMismatch,
            &[PASSWORD_FIELD, PASSWORD_CONFIRMATION_FIELD],
        )));
    }

    Ok(ValidatedRegistration {
        username,
        email,
        password,
    })
}
