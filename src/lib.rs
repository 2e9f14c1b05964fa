//! Email Address - a validated, decomposed email address value type.
//!
//! This library provides a single value type, [`EmailAddress`], that can only
//! be constructed through a validating factory. The factory applies the
//! permissive-but-hardened email pattern recommended by the OWASP validation
//! regex repository, then splits the accepted string into its local part and
//! host. Anything that does not match the pattern is rejected with a
//! [`ValidationError`] carrying the offending input.
//!
//! The component is a pure string classifier and splitter: no DNS or MX
//! lookups, no internationalized addresses, no RFC 5321/5322 full grammar,
//! no normalization, and no I/O of any kind.
//!
//! # Architecture
//!
//! - **email**: the `EmailAddress` value object and its compiled pattern
//! - **error**: the validation error type
//!
//! # Example
//!
//! ```
//! use email_address::EmailAddress;
//!
//! let email = EmailAddress::new("user.name+tag@example.co.uk").unwrap();
//! assert_eq!(email.local_part(), "user.name+tag");
//! assert_eq!(email.host(), "example.co.uk");
//! assert_eq!(email.to_string(), "user.name+tag@example.co.uk");
//!
//! assert!(EmailAddress::new("user@[127.0.0.1]").is_err());
//! ```

// Re-export commonly used types
pub mod email;
pub mod error;

pub use email::EmailAddress;
pub use error::ValidationError;
