//! HTTP client for the places web service (text search and place details).
//!
//! Wraps `reqwest` with API key management, envelope status checks and
//! reshaping into [`CharitySummary`] / [`PlaceDetail`]. Calls are never
//! retried.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::normalize::{build_place_detail, summarize_result, CharitySummary, PlaceDetail};
use crate::types::{DetailsResponse, TextSearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Location appended to searches when the caller gives none.
pub const DEFAULT_LOCATION: &str = "UK";

/// Restricts text search to businesses and organisations.
const SEARCH_TYPE: &str = "establishment";
const SEARCH_LANGUAGE: &str = "en";

const DETAIL_FIELDS: &str =
    "name,formatted_address,formatted_phone_number,website,opening_hours,geometry,rating,url,types,photos";

/// Builds the text-search string for a charity query.
///
/// The location is appended only when it does not already appear in the
/// query (case-insensitive substring match).
#[must_use]
pub fn compose_search_query(query: &str, location: &str) -> String {
    if query.to_lowercase().contains(&location.to_lowercase()) {
        format!("{query} charity")
    } else {
        format!("{query} charity {location}")
    }
}

/// Client for the places web service.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
    /// Creates a new client pointed at the production places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// No request timeout is set; a hung upstream call blocks until the
    /// connection errors.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid absolute URL.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .user_agent("charity-scout/0.1 (places-search)")
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_owned();
        Url::parse(&base_url).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches for charities matching `query` near `location`.
    ///
    /// `ZERO_RESULTS` is a success and yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the envelope status is neither `OK` nor
    ///   `ZERO_RESULTS`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search_places(
        &self,
        query: &str,
        location: &str,
    ) -> Result<Vec<CharitySummary>, PlacesError> {
        let search_query = compose_search_query(query, location);
        tracing::debug!(query = %search_query, "places text search");

        let url = self.build_url(
            "textsearch/json",
            &[
                ("query", search_query.as_str()),
                ("type", SEARCH_TYPE),
                ("language", SEARCH_LANGUAGE),
            ],
        )?;
        let response: TextSearchResponse = self.request_json(url, "textsearch").await?;
        Self::check_status(
            &response.status,
            response.error_message.as_deref(),
            &["OK", "ZERO_RESULTS"],
        )?;

        Ok(response.results.into_iter().map(summarize_result).collect())
    }

    /// Fetches details for one place, including its weekly opening hours.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the envelope status is not `OK`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn get_place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let response: DetailsResponse = self.request_json(url, "details").await?;
        Self::check_status(&response.status, response.error_message.as_deref(), &["OK"])?;

        Ok(build_place_detail(
            place_id,
            response.result.unwrap_or_default(),
        ))
    }

    /// Builds `{base}/{endpoint}?key=...&<extra>` with percent-encoded values.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let raw = format!("{}/{endpoint}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| PlacesError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and deserializes the
    /// body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    fn check_status(
        status: &str,
        error_message: Option<&str>,
        accepted: &[&str],
    ) -> Result<(), PlacesError> {
        tracing::debug!(status, "places API response status");
        if accepted.contains(&status) {
            return Ok(());
        }
        tracing::warn!(
            status,
            error_message = error_message.unwrap_or(""),
            "places API returned error status"
        );
        Err(PlacesError::Api(status.to_owned()))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
