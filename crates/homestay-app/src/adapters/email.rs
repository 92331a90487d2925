//! DNS-over-HTTPS email verifier
//!
//! Combines the syntactic check from the domain's `EmailAddress` with a
//! deliverability check: an MX lookup against a DNS-over-HTTPS JSON
//! endpoint, falling back to an A record when the domain publishes no MX.
//! Both failure modes surface as `InvalidUserData`, matching the single
//! signal the facades expect. Deliverability can be switched off for
//! offline use; verification is then syntax-only.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use homestay::domain::{DomainError, EmailAddress};
use homestay::ports::EmailVerifier;

use crate::config::AppConfig;

/// DNS RR type codes
const RR_TYPE_MX: &str = "MX";
const RR_TYPE_A: &str = "A";

/// NOERROR in the DNS-over-HTTPS JSON response
const DNS_STATUS_OK: u32 = 0;

/// Email verifier backed by a DNS-over-HTTPS resolver
pub struct DohEmailVerifier {
    client: Client,
    resolver_url: String,
    check_deliverability: bool,
}

#[derive(Debug, Deserialize)]
struct DnsResponse {
    #[serde(rename = "Status")]
    status: u32,
    #[serde(rename = "Answer", default)]
    answer: Vec<DnsAnswer>,
}

#[derive(Debug, Deserialize)]
struct DnsAnswer {
    #[serde(rename = "data")]
    _data: String,
}

impl DohEmailVerifier {
    pub fn from_config(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(config.email_verifier_timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            resolver_url: config.email_resolver_url.clone(),
            check_deliverability: config.email_check_deliverability,
        }
    }

    /// Syntax-only verifier, used in tests and offline setups
    pub fn syntax_only() -> Self {
        Self::from_config(&AppConfig::offline())
    }

    async fn has_record(&self, domain: &str, rr_type: &str) -> Result<bool, DomainError> {
        let response = self
            .client
            .get(&self.resolver_url)
            .query(&[("name", domain), ("type", rr_type)])
            .header("accept", "application/dns-json")
            .send()
            .await
            .map_err(|err| DomainError::invalid_user(format!("mail domain lookup failed: {err}")))?;

        if !response.status().is_success() {
            return Err(DomainError::invalid_user(format!(
                "mail domain lookup failed with status {}",
                response.status()
            )));
        }

        let payload: DnsResponse = response
            .json()
            .await
            .map_err(|err| DomainError::invalid_user(format!("mail domain lookup failed: {err}")))?;

        Ok(payload.status == DNS_STATUS_OK && !payload.answer.is_empty())
    }

    async fn check_domain(&self, domain: &str) -> Result<(), DomainError> {
        if self.has_record(domain, RR_TYPE_MX).await? {
            return Ok(());
        }
        // Domains without MX can still accept mail on an A record.
        if self.has_record(domain, RR_TYPE_A).await? {
            return Ok(());
        }
        Err(DomainError::invalid_user(format!(
            "domain {domain} does not accept mail"
        )))
    }
}

#[async_trait]
impl EmailVerifier for DohEmailVerifier {
    async fn verify(&self, candidate: &str) -> Result<EmailAddress, DomainError> {
        let email = EmailAddress::parse(candidate)
            .map_err(|err| DomainError::invalid_user(err.to_string()))?;

        if self.check_deliverability {
            self.check_domain(email.domain()).await?;
        }

        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_syntax_only_normalizes() {
        let verifier = DohEmailVerifier::syntax_only();
        let email = verifier.verify("Ada@Example.COM").await.unwrap();
        assert_eq!(email.as_str(), "Ada@example.com");
    }

    #[tokio::test]
    async fn test_syntax_failure_collapses_to_invalid_user_data() {
        let verifier = DohEmailVerifier::syntax_only();
        let err = verifier.verify("not-an-email").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidUserData(_)));
    }
}
