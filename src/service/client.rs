//! HTTP client for the suggestion service
//!
//! Every public method absorbs failure: a request that cannot be sent, comes
//! back non-2xx, or carries a malformed body resolves to a canned fallback
//! payload instead of an error. Service trouble never surfaces in the UI
//! beyond a log line.

use std::time::Duration;

use crate::config::ServiceConfig;
use crate::error::OmnibarError;

use super::types::{
    AUTOCOMPLETE_PATH, CLEAR_FALLBACK, CLEAR_PATH, HistoryResponse, QueryRequest, SUBMIT_FALLBACK,
    SUBMIT_PATH, SUGGESTION_FALLBACK, SuggestionsResponse,
};

/// Client for the suggestion/history service
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Build a client from the service configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, OmnibarError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch suggestions for the given query text
    ///
    /// Falls back to [`SUGGESTION_FALLBACK`] when the service is unreachable.
    pub async fn fetch_suggestions(&self, query: &str) -> Vec<String> {
        match self.try_fetch_suggestions(query).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("Suggestion request failed: {e}");
                to_owned_list(&SUGGESTION_FALLBACK)
            }
        }
    }

    /// Submit a query, returning the updated history
    ///
    /// Falls back to [`SUBMIT_FALLBACK`] when the service is unreachable.
    pub async fn submit_query(&self, query: &str) -> Vec<String> {
        match self.try_submit_query(query).await {
            Ok(history) => history,
            Err(e) => {
                log::warn!("Submit request failed: {e}");
                to_owned_list(&SUBMIT_FALLBACK)
            }
        }
    }

    /// Clear the history, returning whatever the service reports is left
    ///
    /// Falls back to [`CLEAR_FALLBACK`] when the service is unreachable.
    pub async fn clear_history(&self) -> Vec<String> {
        match self.try_clear_history().await {
            Ok(history) => history,
            Err(e) => {
                log::warn!("Clear request failed: {e}");
                to_owned_list(&CLEAR_FALLBACK)
            }
        }
    }

    async fn try_fetch_suggestions(&self, query: &str) -> Result<Vec<String>, reqwest::Error> {
        let response: SuggestionsResponse = self
            .http
            .post(self.endpoint(AUTOCOMPLETE_PATH))
            .json(&QueryRequest { query })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.suggestions)
    }

    async fn try_submit_query(&self, query: &str) -> Result<Vec<String>, reqwest::Error> {
        let response: HistoryResponse = self
            .http
            .post(self.endpoint(SUBMIT_PATH))
            .json(&QueryRequest { query })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.history)
    }

    // The clear endpoint takes no request body.
    async fn try_clear_history(&self) -> Result<Vec<String>, reqwest::Error> {
        let response: HistoryResponse = self
            .http
            .post(self.endpoint(CLEAR_PATH))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.history)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
