//! Registered user record.
//!
//! A [`UserRecord`] is built once from a validated registration and never
//! mutated. Its display name is derived on demand from the username and
//! email, so there is no stored value a caller could set or leave stale.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::registration::ValidatedRegistration;
use super::validation::{FieldName, Violation, check_length};

/// Field name reported for username violations.
pub const USERNAME_FIELD: FieldName = FieldName::new("username");
/// Minimum username length, counted after trimming.
pub const USERNAME_MIN: usize = 3;
/// Maximum username length, counted after trimming.
pub const USERNAME_MAX: usize = 50;

/// Sequential identifier assigned by the user store; the first record is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Identifier for the record appended after `existing` records, or `None`
    /// once the identifier space is exhausted.
    ///
    /// # Examples
    /// ```
    /// use userlab::domain::UserId;
    ///
    /// assert_eq!(UserId::after_count(0), Some(UserId::new(1)));
    /// ```
    pub fn after_count(existing: usize) -> Option<Self> {
        u64::try_from(existing)
            .ok()
            .and_then(|count| count.checked_add(1))
            .map(Self)
    }

    /// Raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Username trimmed of surrounding whitespace and bounded in length.
///
/// ## Invariants
/// - No leading or trailing whitespace.
/// - Between [`USERNAME_MIN`] and [`USERNAME_MAX`] characters inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trim and validate a raw username.
    ///
    /// # Examples
    /// ```
    /// use userlab::domain::Username;
    ///
    /// let name = Username::new("  bob ").expect("valid after trimming");
    /// assert_eq!(name.as_ref(), "bob");
    /// assert!(Username::new(" ab ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, Violation> {
        let trimmed = raw.trim();
        check_length(USERNAME_FIELD, trimmed, USERNAME_MIN, Some(USERNAME_MAX))?;
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address, stored as given apart from trimming; the format is not
/// checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim a raw email address.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_owned())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored user created by a successful registration.
///
/// Serialises as `{id, username, email, createdAt, displayName}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "UserRecordDto")]
pub struct UserRecord {
    id: UserId,
    username: Username,
    email: EmailAddress,
    created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build the record for `registration`, assigned `id` and stamped
    /// `created_at`. Deterministic for identical inputs.
    pub fn build(registration: &ValidatedRegistration, id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: registration.username().clone(),
            email: registration.email().clone(),
            created_at,
        }
    }

    /// Identifier assigned by the store.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Trimmed username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Derived `"{username} <{email}>"` label.
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.username, self.email)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserRecordDto {
    id: UserId,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
    display_name: String,
}

impl From<UserRecord> for UserRecordDto {
    fn from(value: UserRecord) -> Self {
        let display_name = value.display_name();
        let UserRecord {
            id,
            username,
            email,
            created_at,
        } = value;
        Self {
            id,
            username: username.0,
            email: email.0,
            created_at,
            display_name,
        }
    }
}

#[cfg(test)]
mod tests;
