//! Email value object

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// A validated email address, normalized to lowercase
///
/// Equality and hashing use the normalized value, so `JANE@Example.com` and
/// `jane@example.com` are the same email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Parse and normalize an email address
    pub fn new(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::validation("Email cannot be empty"));
        }

        let normalized = value.trim().to_lowercase();

        let pattern = Regex::new(EMAIL_PATTERN).unwrap();
        if !pattern.is_match(&normalized) {
            return Err(Error::validation("Invalid email format"));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
