//! # Profanity Checkers
//!
//! Two [`ProfanityChecker`] implementations:
//!
//! - [`PurgomalumClient`] asks the Purgomalum web service.
//! - [`BannedWordsChecker`] matches a fixed word list locally.
//!
//! ## Purgomalum Request
//! ```text
//! GET {base}/service/containsprofanity?text=<name>
//!
//! 200 "true"   → profane
//! 200 "false"  → clean
//! anything else → StoreError::Profanity
//! ```

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::{StoreError, StoreResult};
use crate::store::ProfanityChecker;

/// Default Purgomalum endpoint.
pub const PURGOMALUM_URL: &str = "https://www.purgomalum.com";

// =============================================================================
// Purgomalum
// =============================================================================

/// HTTP client for the Purgomalum profanity filter.
#[derive(Debug, Clone)]
pub struct PurgomalumClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PurgomalumClient {
    /// Builds a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> StoreResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::Profanity(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(PurgomalumClient { client, base_url })
    }

    /// URL that classifies `text`.
    pub fn endpoint(&self, text: &str) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Profanity(format!("Base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["service", "containsprofanity"]);
        url.query_pairs_mut().clear().append_pair("text", text);
        Ok(url)
    }
}

/// Reads a `true` / `false` response body.
pub fn parse_body(body: &str) -> StoreResult<bool> {
    match body.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StoreError::Profanity(format!(
            "Unexpected response body: '{}'",
            other
        ))),
    }
}

#[async_trait]
impl ProfanityChecker for PurgomalumClient {
    async fn contains_profanity(&self, text: &str) -> StoreResult<bool> {
        let url = self.endpoint(text)?;
        debug!(url = %url, "Checking name with Purgomalum");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_body(&body)
    }
}

// =============================================================================
// Banned Words
// =============================================================================

/// Case-insensitive substring match against a word list.
#[derive(Debug, Clone, Default)]
pub struct BannedWordsChecker {
    words: Vec<String>,
}

impl BannedWordsChecker {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        BannedWordsChecker { words }
    }

    /// Synchronous check, shared by the trait impl.
    pub fn is_profane(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.words.iter().any(|word| text.contains(word.as_str()))
    }
}

#[async_trait]
impl ProfanityChecker for BannedWordsChecker {
    async fn contains_profanity(&self, text: &str) -> StoreResult<bool> {
        Ok(self.is_profane(text))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PurgomalumClient {
        PurgomalumClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_encodes_text() {
        let url = client(PURGOMALUM_URL).endpoint("Fried chicken & beer").unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.purgomalum.com/service/containsprofanity?text=Fried+chicken+%26+beer"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = client("http://localhost:8080/proxy/").endpoint("pasta").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/proxy/service/containsprofanity?text=pasta"
        );

        let url = client("http://localhost:8080/proxy").endpoint("pasta").unwrap();
        assert_eq!(url.path(), "/proxy/service/containsprofanity");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = PurgomalumClient::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, StoreError::Profanity(_)));
    }

    #[test]
    fn test_parse_body() {
        assert!(parse_body("true").unwrap());
        assert!(!parse_body("false\n").unwrap());
        assert!(matches!(parse_body("<html>"), Err(StoreError::Profanity(_))));
    }

    #[tokio::test]
    async fn test_banned_words_are_case_insensitive() {
        let checker = BannedWordsChecker::new(["darn", "  ", "Heck"]);

        assert!(checker.contains_profanity("DARN good chicken").await.unwrap());
        assert!(checker.contains_profanity("what the heck").await.unwrap());
        assert!(!checker.contains_profanity("Cream pasta").await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_word_list_accepts_everything() {
        let checker = BannedWordsChecker::default();
        assert!(!checker.contains_profanity("anything").await.unwrap());
    }
}
