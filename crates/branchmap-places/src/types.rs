//! Wire types for the Places and Geocoding endpoints.
//!
//! All responses share the `{"status": "...", ...}` envelope; the client
//! checks `status` before handing the body to these types, so the envelope
//! fields here only need to cover the success shape.

use serde::Deserialize;

/// A coordinate pair as the API returns it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

// ---------------------------------------------------------------------------
// nearby search
// ---------------------------------------------------------------------------

/// One page of nearby-search results.
///
/// `next_page_token` is present when more pages exist; the token is not
/// valid immediately — callers must wait before redeeming it.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single hit from nearby search. The summary's `types` tags drive the
/// primary tier of audience classification downstream, so they are kept
/// alongside the identifier even though the detail lookup re-fetches most
/// other fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: Geometry,
}

// ---------------------------------------------------------------------------
// place details
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsEnvelope {
    pub result: PlaceDetails,
}

/// Full attributes for one place, limited to the requested field list.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub user_ratings_total: u32,
    #[serde(default)]
    pub business_status: Option<String>,
}

// ---------------------------------------------------------------------------
// reverse geocode
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeEnvelope {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// One candidate address for a coordinate, most specific first.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
