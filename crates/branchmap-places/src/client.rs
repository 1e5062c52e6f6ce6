//! HTTP client for the Places / Geocoding web service.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and envelope `status` checking. All endpoints accept a mock base URL via
//! [`PlacesClient::with_base_url`] for testing.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsEnvelope, GeocodeEnvelope, GeocodeResult, PlaceDetails, SearchPage};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

const NEARBY_SEARCH_PATH: &str = "maps/api/place/nearbysearch/json";
const DETAILS_PATH: &str = "maps/api/place/details/json";
const GEOCODE_PATH: &str = "maps/api/geocode/json";

/// Detail fields requested per place; anything beyond these is billed waste.
const DETAIL_FIELDS: &str = "name,formatted_address,geometry,rating,user_ratings_total,business_status";

/// Client for the Places and Geocoding REST endpoints.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Google endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::Api`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| PlacesError::Api {
            status: "INVALID_BASE_URL".to_string(),
            message: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a nearby search around a coordinate.
    ///
    /// Returns the first page; when `SearchPage::next_page_token` is set,
    /// follow it with [`Self::nearby_search_page`] after a pause.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns a non-success status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn nearby_search(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        keyword: &str,
        language: &str,
    ) -> Result<SearchPage, PlacesError> {
        let location = format!("{lat},{lng}");
        let radius = radius_m.to_string();
        let url = self.build_url(
            NEARBY_SEARCH_PATH,
            &[
                ("location", &location),
                ("radius", &radius),
                ("keyword", keyword),
                ("language", language),
            ],
        );
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
            context: format!("nearbysearch(location={location})"),
            source: e,
        })
    }

    /// Redeems a next-page token from an earlier nearby search.
    ///
    /// Tokens become valid a short delay after they are issued; redeeming
    /// too early yields an `INVALID_REQUEST` status from the API.
    ///
    /// # Errors
    ///
    /// Same as [`Self::nearby_search`].
    pub async fn nearby_search_page(&self, page_token: &str) -> Result<SearchPage, PlacesError> {
        let url = self.build_url(NEARBY_SEARCH_PATH, &[("pagetoken", page_token)]);
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
            context: "nearbysearch(pagetoken)".to_string(),
            source: e,
        })
    }

    /// Fetches full details for one place by its identifier.
    ///
    /// # Errors
    ///
    /// Same as [`Self::nearby_search`]; a missing `result` object also
    /// surfaces as [`PlacesError::Deserialize`].
    pub async fn place_details(
        &self,
        place_id: &str,
        language: &str,
    ) -> Result<PlaceDetails, PlacesError> {
        let url = self.build_url(
            DETAILS_PATH,
            &[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("language", language),
            ],
        );
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: DetailsEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Ok(envelope.result)
    }

    /// Reverse-geocodes a coordinate into candidate addresses, most specific
    /// first. An empty vector means the API had nothing for the coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`Self::nearby_search`].
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
        language: &str,
    ) -> Result<Vec<GeocodeResult>, PlacesError> {
        let latlng = format!("{lat},{lng}");
        let url = self.build_url(GEOCODE_PATH, &[("latlng", &latlng), ("language", language)]);
        let body = self.request_json(&url).await?;
        Self::check_status(&body)?;

        let envelope: GeocodeEnvelope =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode(latlng={latlng})"),
                source: e,
            })?;

        Ok(envelope.results)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters, appending the API key last. Endpoint paths are static, so
    /// this never fails.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        tracing::debug!(path = url.path(), "places API request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the envelope `status` field. `OK` and `ZERO_RESULTS` are both
    /// success (the latter just means an empty result set); anything else is
    /// an API error, with `error_message` attached when the API provides one.
    fn check_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        if status == "OK" || status == "ZERO_RESULTS" {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no error message")
            .to_string();
        Err(PlacesError::Api {
            status: status.to_string(),
            message,
        })
    }
}
