//! End-to-end tests for email address validation and decomposition.
//!
//! These tests exercise the public API the way a caller would: construct
//! addresses from raw strings, inspect the decomposed parts, render them
//! back, and check that every rejection family is refused with the error
//! carrying the offending input.

use email_address::{EmailAddress, ValidationError};

/// A representative accepted address decomposes into its two halves and
/// renders back to the exact input.
#[test]
fn test_accepts_and_decomposes_plus_tagged_address() {
    let email = EmailAddress::new("user.name+tag@example.co.uk").unwrap();

    assert_eq!(email.local_part(), "user.name+tag");
    assert_eq!(email.host(), "example.co.uk");
    assert_eq!(email.to_string(), "user.name+tag@example.co.uk");
}

/// Hosts need at least one dot-separated label before an alphabetic TLD of
/// two or more characters.
#[test]
fn test_rejects_host_without_top_level_label() {
    assert!(EmailAddress::new("a@b").is_err());
    assert!(EmailAddress::new("a@b.c").is_err());
    assert!(EmailAddress::new("a@b.co").is_ok());
}

/// Local parts must not start with, end with, or repeat the dot.
#[test]
fn test_rejects_misplaced_dots_in_local_part() {
    assert!(EmailAddress::new(".user@example.com").is_err());
    assert!(EmailAddress::new("user.@example.com").is_err());
    assert!(EmailAddress::new("user..name@example.com").is_err());
}

/// Absent input is a rejection like any other, recorded as such.
#[test]
fn test_rejects_absent_input() {
    let err = EmailAddress::from_optional(None).unwrap_err();

    assert_eq!(err, ValidationError::InvalidEmailAddress(None));
    assert_eq!(err.raw_input(), None);
    assert_eq!(err.to_string(), "Invalid email address: <none>");
}

/// Bracketed IP literals are not valid hosts under this policy.
#[test]
fn test_rejects_ip_literal_hosts() {
    assert!(EmailAddress::new("user@[127.0.0.1]").is_err());
    assert!(EmailAddress::new("user@[ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff]").is_err());
}

/// Quoted local parts are not valid under this policy.
#[test]
fn test_rejects_quoted_local_part() {
    assert!(EmailAddress::new("\"a\"@example.com").is_err());
    assert!(EmailAddress::new("\" \"@example.com").is_err());
}

/// The rejected raw input travels with the error for diagnostics.
#[test]
fn test_error_reports_rejected_input() {
    let err = EmailAddress::new("user@[127.0.0.1]").unwrap_err();

    assert_eq!(err.raw_input(), Some("user@[127.0.0.1]"));
    assert_eq!(err.to_string(), "Invalid email address: user@[127.0.0.1]");
}

/// Accepted values survive a JSON round-trip unchanged.
#[test]
fn test_json_round_trip() {
    let email = EmailAddress::new("user.name+tag@example.co.uk").unwrap();

    let json = serde_json::to_string(&email).unwrap();
    assert_eq!(json, "\"user.name+tag@example.co.uk\"");

    let parsed: EmailAddress = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, email);
}

/// Deserializing a string that fails validation is an error, so no invalid
/// value can enter through serde either.
#[test]
fn test_json_rejects_invalid_address() {
    let result: Result<EmailAddress, _> = serde_json::from_str("\"a@b\"");
    assert!(result.is_err());
}
