//! Fact source backed by a plain HTTP GET.
//!
//! One request per attempt: no headers, no body, no query parameters.
//! Uses the reqwest client defaults, so there is no explicit timeout.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::facts::{Fact, FactSource, FetchError};

pub struct HttpFactSource {
    url: String,
    host: String,
    client: reqwest::Client,
}

impl HttpFactSource {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let host = reqwest::Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| url.clone());

        Self {
            url,
            host,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    fn name(&self) -> &str {
        &self.host
    }

    async fn fetch(&self) -> Result<Fact, FetchError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Status is deliberately not used to classify the attempt: a JSON
        // error body from a 4xx/5xx still decodes as a fact.
        let status = response.status();
        if !status.is_success() {
            warn!("Fact service returned HTTP {status}, parsing body anyway");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let fact = Fact::from_json(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!(
            "Fetched fact from {} ({} bytes, status {})",
            self.host,
            body.len(),
            status.as_u16()
        );
        Ok(fact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_endpoint_host() {
        let source = HttpFactSource::new("https://uselessfacts.jsph.pl/api/v2/facts/random");
        assert_eq!(source.name(), "uselessfacts.jsph.pl");
        assert_eq!(source.url(), "https://uselessfacts.jsph.pl/api/v2/facts/random");
    }

    #[test]
    fn test_name_falls_back_to_raw_url() {
        let source = HttpFactSource::new("not a url");
        assert_eq!(source.name(), "not a url");
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let source = HttpFactSource::new("not a url");
        let result = source.fetch().await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
