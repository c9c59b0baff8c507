//! # fxcache Provider
//!
//! Outbound HTTP adapter: implements the `RateSource` port against an
//! exchangerate-api.com style endpoint
//! (`GET {base_url}/v4/latest/{BASE}` returning `{ "rates": { ... } }`).

use std::collections::HashMap;

use chrono::Utc;
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::Deserialize;

use fxcache_types::{CurrencyCode, RateSource, RateTable, SourceError};

/// HTTP rate source.
///
/// Every request carries a cache-busting query parameter and no-store
/// headers so no intermediary cache (proxy, service worker) can fake a
/// reachable provider. The request itself has no timeout; the engine bounds
/// each call with its own budget.
pub struct HttpRateSource {
    base_url: String,
    http: Client,
}

#[derive(Deserialize)]
struct RatesPayload {
    rates: HashMap<CurrencyCode, f64>,
}

impl HttpRateSource {
    /// Creates a new source against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Uses a preconfigured `reqwest` client (proxies, TLS settings, ...).
    pub fn with_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    fn request_url(&self, base: &CurrencyCode) -> String {
        format!(
            "{}/v4/latest/{}?_={}",
            self.base_url,
            base,
            cache_buster()
        )
    }
}

#[async_trait::async_trait]
impl RateSource for HttpRateSource {
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable, SourceError> {
        let response = self
            .http
            .get(self.request_url(base))
            .header(CACHE_CONTROL, "no-cache, no-store, must-revalidate")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let payload: RatesPayload = response
            .json()
            .await
            .map_err(|err| SourceError::MalformedPayload(err.to_string()))?;

        validate_table(payload.rates)
    }
}

fn transport_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Transport(err.to_string())
    }
}

/// A value no intermediary cache can have seen before.
fn cache_buster() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), rand::random::<u32>())
}

/// Structural validation: only a non-empty table of positive, finite rates
/// counts as a valid payload.
fn validate_table(rates: RateTable) -> Result<RateTable, SourceError> {
    if rates.is_empty() {
        return Err(SourceError::MalformedPayload("empty rate table".to_string()));
    }
    if let Some((code, rate)) = rates.iter().find(|(_, rate)| !rate.is_finite() || **rate <= 0.0) {
        return Err(SourceError::MalformedPayload(format!(
            "unusable rate {rate} for {code}"
        )));
    }
    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let source = HttpRateSource::new("https://api.example.com/");
        assert_eq!(source.base_url, "https://api.example.com");
    }

    #[test]
    fn request_url_targets_base_currency() {
        let source = HttpRateSource::new("https://api.example.com");
        let url = source.request_url(&code("USD"));
        assert!(url.starts_with("https://api.example.com/v4/latest/USD?_="));
    }

    #[test]
    fn cache_busters_are_unique() {
        assert_ne!(cache_buster(), cache_buster());
    }

    #[test]
    fn payload_parses_and_ignores_extra_fields() {
        let json = r#"{"base":"USD","date":"2026-08-25","rates":{"USD":1.0,"AUD":1.5}}"#;
        let payload: RatesPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.rates.get(&code("AUD")), Some(&1.5));
    }

    #[test]
    fn validation_accepts_positive_finite_rates() {
        let rates = RateTable::from([(code("USD"), 1.0), (code("JPY"), 147.2)]);
        assert!(validate_table(rates).is_ok());
    }

    #[test]
    fn validation_rejects_unusable_tables() {
        assert!(validate_table(RateTable::new()).is_err());
        assert!(validate_table(RateTable::from([(code("USD"), 0.0)])).is_err());
        assert!(validate_table(RateTable::from([(code("USD"), -1.0)])).is_err());
        assert!(validate_table(RateTable::from([(code("USD"), f64::NAN)])).is_err());
    }
}
