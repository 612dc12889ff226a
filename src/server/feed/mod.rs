//! HTTP client for the external cricket match feed.
//!
//! The feed is a polled, read-only source of truth for match phases, scores,
//! and squads. Every request carries the API key as a query parameter and
//! every response arrives wrapped in a status envelope.

pub mod model;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::server::error::feed::FeedError;
use crate::server::feed::model::{FeedEnvelope, FeedMatch, FeedSquad};

static REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FeedClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetches the current score listing: every tracked match with its
    /// phase tag, sides, and running scores.
    pub async fn matches(&self) -> Result<Vec<FeedMatch>, FeedError> {
        let url = format!("{}/cricScore", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        Self::unwrap_envelope(response).await
    }

    /// Fetches both squads for a single match.
    pub async fn match_squads(&self, match_id: &str) -> Result<Vec<FeedSquad>, FeedError> {
        let url = format!("{}/match_squad", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("id", match_id)])
            .send()
            .await?;

        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned + Default>(
        response: reqwest::Response,
    ) -> Result<T, FeedError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let envelope: FeedEnvelope<T> = response.json().await?;
        if envelope.status != "success" {
            return Err(FeedError::Api(envelope.failure_reason()));
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crease_test_utils::prelude::*;

    mod matches_tests {
        use super::*;
        use crate::server::feed::model::MatchPhase;

        /// Expect Ok with the parsed match list when the feed responds with a
        /// success envelope.
        #[tokio::test]
        async fn returns_matches_on_success() {
            let setup = TestBuilder::new()
                .with_matches_endpoint(vec![factory::feed_match("match-1", "live")], 1)
                .build()
                .await
                .unwrap();

            let client = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
            let matches = client.matches().await.unwrap();

            assert_eq!(matches.len(), 1);
            assert_eq!(matches[0].id, "match-1");
            assert_eq!(matches[0].ms, MatchPhase::Live);
            setup.assert_mocks();
        }

        /// Expect Err(FeedError::Status) when the feed responds with a 5xx.
        #[tokio::test]
        async fn returns_error_on_http_failure() {
            let setup = TestBuilder::new()
                .with_matches_endpoint_error(503, 1)
                .build()
                .await
                .unwrap();

            let client = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
            let result = client.matches().await;

            assert!(matches!(result, Err(FeedError::Status(503))));
            setup.assert_mocks();
        }
    }

    mod match_squads_tests {
        use super::*;

        /// Expect Ok with both squads when the feed knows the match.
        #[tokio::test]
        async fn returns_squads_on_success() {
            let ids = factory::default_player_ids();
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            let setup = TestBuilder::new()
                .with_squad_endpoint("match-1", factory::feed_squads(&ids), 1)
                .build()
                .await
                .unwrap();

            let client = FeedClient::new(&setup.feed_url(), TEST_FEED_API_KEY).unwrap();
            let squads = client.match_squads("match-1").await.unwrap();

            assert_eq!(squads.len(), 2);
            assert_eq!(squads[0].players.len(), 11);
            setup.assert_mocks();
        }
    }
}
