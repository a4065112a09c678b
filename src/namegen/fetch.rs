//! Remote fetch of the name generator page.

use crate::namegen::{FetchError, NameLength};
use async_trait::async_trait;
use std::time::Duration;

/// Source of candidate name pages. Production uses [`HttpNameSource`]; tests
/// substitute a fake.
#[async_trait]
pub trait NameSource {
    async fn fetch(&self, length: NameLength) -> Result<String, FetchError>;
}

/// Fetches the generator page over HTTP with a hard per-request timeout.
pub struct HttpNameSource {
    client: reqwest::Client,
    url_template: String,
    timeout: Duration,
}

impl HttpNameSource {
    pub fn new(url_template: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url_template,
            timeout,
        }
    }

    fn url_for(&self, length: NameLength) -> String {
        self.url_template.replace("{length}", length.as_str())
    }
}

#[async_trait]
impl NameSource for HttpNameSource {
    async fn fetch(&self, length: NameLength) -> Result<String, FetchError> {
        let url = self.url_for(length);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;
        // Non-success statuses are transport failures; the body is not parsed.
        let response = response.error_for_status().map_err(classify)?;
        response.text().await.map_err(classify)
    }
}

/// reqwest reports deadline expiry as a regular error; the command has to
/// surface it with a distinct message.
fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_substitution() {
        let source = HttpNameSource::new(
            "https://www.fantasynamegen.com/sf/{length}/".to_string(),
            Duration::from_secs(5),
        );
        assert_eq!(
            source.url_for(NameLength::Short),
            "https://www.fantasynamegen.com/sf/short/"
        );
        assert_eq!(
            source.url_for(NameLength::Long),
            "https://www.fantasynamegen.com/sf/long/"
        );
    }
}
