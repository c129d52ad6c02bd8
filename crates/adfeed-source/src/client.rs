//! HTTP client for the Hasura GraphQL endpoint.
//!
//! Wraps `reqwest` with admin-secret authentication and typed response
//! decoding. GraphQL-level failures (a non-empty `errors` array) are surfaced
//! as [`SourceError::GraphQl`]. There is no retry: a failed fetch fails the
//! run.

use std::time::Duration;

use adfeed_core::rules::TARGET_CATEGORY_ID;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Url};

use crate::error::SourceError;
use crate::types::{AdsData, AdsQueryVariables, GraphQlRequest, GraphQlResponse, RawAd};

const ADMIN_SECRET_HEADER: &str = "X-Hasura-Admin-Secret";

/// How far back the recent-ads query looks.
pub const LOOKBACK_HOURS: i64 = 24;

/// Client for the ads GraphQL API.
///
/// Holds the HTTP client, endpoint, and admin secret. Point it at a mock
/// server in tests by passing the mock's URI as `endpoint`.
pub struct AdsClient {
    client: Client,
    endpoint: Url,
    admin_secret: String,
}

impl AdsClient {
    /// Creates a client for the given GraphQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidEndpoint`] if `endpoint` is not a valid
    /// URL, or [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint: &str,
        admin_secret: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let endpoint_url = Url::parse(endpoint).map_err(|e| SourceError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url,
            admin_secret: admin_secret.to_owned(),
        })
    }

    /// Fetches published ads in the target category updated in the last
    /// [`LOOKBACK_HOURS`] hours.
    ///
    /// # Errors
    ///
    /// See [`AdsClient::fetch_ads_updated_since`].
    pub async fn fetch_recent_ads(&self) -> Result<Vec<RawAd>, SourceError> {
        let since = Utc::now() - chrono::Duration::hours(LOOKBACK_HOURS);
        self.fetch_ads_updated_since(since).await
    }

    /// Fetches published ads in the target category with
    /// `updated_at >= since`, in the order the source returns them.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SourceError::Deserialize`] if the body is not the expected shape.
    /// - [`SourceError::GraphQl`] if the response carries GraphQL errors.
    /// - [`SourceError::MissingData`] if the response has no `data`.
    pub async fn fetch_ads_updated_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<RawAd>, SourceError> {
        let query = ads_query();
        let request = GraphQlRequest {
            query: &query,
            variables: AdsQueryVariables {
                last_24_hours: format_boundary(since),
            },
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            since = %request.variables.last_24_hours,
            "querying ads"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ADMIN_SECRET_HEADER, &self.admin_secret)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let envelope: GraphQlResponse<AdsData> =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: format!("ads query response from {}", self.endpoint),
                source: e,
            })?;

        Self::check_graphql_errors(&envelope)?;

        let data = envelope.data.ok_or_else(|| SourceError::MissingData {
            endpoint: self.endpoint.to_string(),
        })?;

        tracing::info!(count = data.ads.len(), "fetched ads");
        Ok(data.ads)
    }

    /// Joins every GraphQL error message into one [`SourceError::GraphQl`].
    fn check_graphql_errors<T>(envelope: &GraphQlResponse<T>) -> Result<(), SourceError> {
        if envelope.errors.is_empty() {
            return Ok(());
        }
        let messages = envelope
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Err(SourceError::GraphQl(messages))
    }
}

/// The ads query, constrained to published ads in [`TARGET_CATEGORY_ID`].
pub(crate) fn ads_query() -> String {
    format!(
        r#"query ($last24Hours: timestamptz!) {{
  ads(where: {{
    status: {{_eq: "Published"}},
    category_id: {{_eq: "{TARGET_CATEGORY_ID}"}},
    updated_at: {{_gte: $last24Hours}}
  }}) {{
    id
    draft_id
    description
    attributes
    code_number
  }}
}}"#
    )
}

/// RFC 3339 in UTC with second precision, e.g. `2026-10-18T06:00:00Z`.
pub(crate) fn format_boundary(since: DateTime<Utc>) -> String {
    since.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
