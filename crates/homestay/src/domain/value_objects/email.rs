//! EmailAddress - Normalized email value object
//!
//! Syntactic validation happens at construction; the normalized form
//! (domain part lowercased, local part preserved) is the only form stored.
//! Deliverability checking is a separate concern behind the
//! `EmailVerifier` port.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of the local part per RFC 5321
const MAX_LOCAL_LEN: usize = 64;
/// Maximum length of the domain per RFC 5321
const MAX_DOMAIN_LEN: usize = 253;
/// Maximum length of a single domain label
const MAX_LABEL_LEN: usize = 63;

const LOCAL_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~.";

/// Email syntax errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailParseError {
    #[error("address must contain exactly one '@'")]
    MissingAt,
    #[error("local part is empty or too long")]
    BadLocalLength,
    #[error("local part contains an invalid character")]
    BadLocalChar,
    #[error("local part has a misplaced dot")]
    BadLocalDot,
    #[error("domain is empty or too long")]
    BadDomainLength,
    #[error("domain must contain at least one dot")]
    MissingDomainDot,
    #[error("domain label is invalid")]
    BadDomainLabel,
}

/// A syntactically valid, normalized email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and normalize a candidate address.
    ///
    /// The domain part is lowercased; the local part is kept as given.
    pub fn parse(candidate: &str) -> Result<Self, EmailParseError> {
        let candidate = candidate.trim();
        let mut parts = candidate.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return Err(EmailParseError::MissingAt),
        };

        validate_local(local)?;
        validate_domain(domain)?;

        Ok(Self(format!("{}@{}", local, domain.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after the '@', already lowercased.
    pub fn domain(&self) -> &str {
        // Invariant: the stored form always contains one '@'.
        self.0.rsplit('@').next().unwrap_or_default()
    }
}

fn validate_local(local: &str) -> Result<(), EmailParseError> {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return Err(EmailParseError::BadLocalLength);
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(EmailParseError::BadLocalDot);
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    {
        return Err(EmailParseError::BadLocalChar);
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), EmailParseError> {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return Err(EmailParseError::BadDomainLength);
    }
    if !domain.contains('.') {
        return Err(EmailParseError::MissingDomainDot);
    }
    for label in domain.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(EmailParseError::BadDomainLabel);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(EmailParseError::BadDomainLabel);
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(EmailParseError::BadDomainLabel);
        }
    }
    Ok(())
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = EmailParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_domain_case() {
        let email = EmailAddress::parse("Alice@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Alice@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_parse_preserves_local_case() {
        let email = EmailAddress::parse("Bob.Smith@example.com").unwrap();
        assert_eq!(email.as_str(), "Bob.Smith@example.com");
    }

    #[test]
    fn test_rejects_missing_at() {
        assert_eq!(
            EmailAddress::parse("not-an-email"),
            Err(EmailParseError::MissingAt)
        );
        assert_eq!(
            EmailAddress::parse("a@b@example.com"),
            Err(EmailParseError::MissingAt)
        );
    }

    #[test]
    fn test_rejects_bare_domain() {
        assert_eq!(
            EmailAddress::parse("alice@localhost"),
            Err(EmailParseError::MissingDomainDot)
        );
    }

    #[test]
    fn test_rejects_dotted_local_edges() {
        assert_eq!(
            EmailAddress::parse(".alice@example.com"),
            Err(EmailParseError::BadLocalDot)
        );
        assert_eq!(
            EmailAddress::parse("a..b@example.com"),
            Err(EmailParseError::BadLocalDot)
        );
    }

    #[test]
    fn test_rejects_bad_label() {
        assert_eq!(
            EmailAddress::parse("alice@-example.com"),
            Err(EmailParseError::BadDomainLabel)
        );
        assert_eq!(
            EmailAddress::parse("alice@example..com"),
            Err(EmailParseError::BadDomainLabel)
        );
    }
}
