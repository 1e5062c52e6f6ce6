//! HTTP client for the Google Places and Geocoding web APIs.
//!
//! Covers the three endpoints the survey pipeline needs: nearby search
//! (with opaque next-page tokens), place details with a selectable field
//! list, and reverse geocoding. Every response carries a top-level `status`
//! string; anything other than `OK` / `ZERO_RESULTS` is surfaced as
//! [`PlacesError::Api`].

pub mod client;
pub mod error;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use types::{
    AddressComponent, GeocodeResult, Geometry, LatLng, PlaceDetails, PlaceSummary, SearchPage,
};
