//! EmailAddress value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Validation pattern from the OWASP validation regex repository.
///
/// The local part is one or more runs of `[a-zA-Z0-9_+&*-]` separated by
/// single dots, which rules out leading, trailing, and consecutive dots. The
/// host is one or more alphanumeric-or-hyphen labels each followed by a dot,
/// ending in an alphabetic top-level label of at least two characters, which
/// rules out bracketed IP literals and single-character TLDs. Anchored at
/// both ends, so the pattern must cover the entire input.
static EMAIL_ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}$")
        .expect("Failed to compile email address regex")
});

/// A validated, decomposed email address.
///
/// This ensures that email addresses are validated at construction time: the
/// only way to obtain an instance is through the fallible constructors, so
/// every live value satisfies the pattern. The value is immutable and stores
/// the two halves of the address separately; rendering it with `Display`
/// reproduces the exact string that was accepted.
///
/// Equality and hashing are structural over `(local_part, host)` and
/// case-sensitive; no normalization is performed.
///
/// # Example
///
/// ```
/// use email_address::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.local_part(), "user");
/// assert_eq!(email.host(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    local_part: String,
    host: String,
}

impl EmailAddress {
    /// Create a new EmailAddress, validating the raw input.
    ///
    /// The input is matched against the OWASP pattern as a whole, then split
    /// at the `@` separator. Validation happens entirely up front; the split
    /// never re-checks structure.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmailAddress` carrying the rejected
    /// input if it does not match the pattern.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !EMAIL_ADDRESS_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidEmailAddress(Some(raw)));
        }

        // The local-part character class excludes '@', so the first '@' is
        // the only one and the split is lossless.
        let (local_part, host) = raw
            .split_once('@')
            .expect("validated email contains '@'");

        Ok(Self {
            local_part: local_part.to_owned(),
            host: host.to_owned(),
        })
    }

    /// Create a new EmailAddress from input that may be absent.
    ///
    /// Absent input is rejected the same way malformed input is, with the
    /// error recording that nothing was supplied.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmailAddress(None)` when `raw` is
    /// `None`, and the same error as [`EmailAddress::new`] otherwise.
    pub fn from_optional(raw: Option<String>) -> Result<Self, ValidationError> {
        match raw {
            Some(raw) => Self::new(raw),
            None => Err(ValidationError::InvalidEmailAddress(None)),
        }
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Get the host (after '@').
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Convert into the underlying `(local_part, host)` strings.
    pub fn into_parts(self) -> (String, String) {
        (self.local_part, self.host)
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as the rendered string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - reproduces the accepted input exactly
impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.host)
    }
}
