//! Per-branch enrichment: details, proximity analytics, roadside class, and
//! audience segments.

use std::time::Duration;

use branchmap_places::{LatLng, PlaceSummary, PlacesClient};
use serde::Serialize;

use crate::analysis::proximity_stats;
use crate::roadside::{classify_roadside, LocationType};
use crate::segment::{classify_audience, join_audience};

#[derive(Debug, Clone)]
pub struct EnrichConfig {
    pub language: String,
    /// Pause between branches, keeps request rate polite.
    pub detail_delay_ms: u64,
}

/// One fully enriched branch, shaped for export. Field order here is the
/// CSV column order.
#[derive(Debug, Clone, Serialize)]
pub struct BranchRecord {
    pub branch_name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub average_rating: f64,
    pub review_count: u64,
    pub location_type: &'static str,
    /// Comma-joined audience labels, empty cell when none inferred.
    pub audience: Option<String>,
    pub branches_within_2km: u32,
    pub nearest_branch_km: f64,
    pub place_id: String,
    #[serde(skip)]
    pub business_status: Option<String>,
}

/// Enrich every unique branch in order.
///
/// Proximity is measured against the coordinates of the full candidate set
/// as it stood before enrichment, so a branch whose detail fetch fails still
/// counts toward its neighbors' density numbers. Detail failures drop the
/// branch from the output with a warning; reverse-geocode failures only
/// degrade its roadside class to undetermined.
pub async fn enrich_branches(
    client: &PlacesClient,
    candidates: &[PlaceSummary],
    config: &EnrichConfig,
) -> Vec<BranchRecord> {
    let all_coords: Vec<LatLng> = candidates.iter().map(|c| c.geometry.location).collect();
    let mut records = Vec::with_capacity(candidates.len());

    for (i, candidate) in candidates.iter().enumerate() {
        tracing::info!(
            branch = i + 1,
            total = candidates.len(),
            name = %candidate.name,
            "enriching branch"
        );

        let details = match client.place_details(&candidate.place_id, &config.language).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!(
                    place_id = %candidate.place_id,
                    error = %e,
                    "detail fetch failed; dropping branch"
                );
                continue;
            }
        };

        let own = details.geometry.location;
        let proximity = proximity_stats(own, i, &all_coords);

        let location_type = match client.reverse_geocode(own.lat, own.lng, &config.language).await {
            Ok(results) => classify_roadside(&results),
            Err(e) => {
                tracing::warn!(
                    place_id = %candidate.place_id,
                    error = %e,
                    "reverse geocoding failed; roadside class undetermined"
                );
                LocationType::Undetermined
            }
        };

        let segments = classify_audience(
            &candidate.types,
            &details.name,
            &details.formatted_address,
        );

        records.push(BranchRecord {
            branch_name: details.name,
            address: details.formatted_address,
            latitude: own.lat,
            longitude: own.lng,
            average_rating: details.rating,
            review_count: u64::from(details.user_ratings_total),
            location_type: location_type.label(),
            audience: join_audience(&segments),
            branches_within_2km: proximity.nearby_within_2km,
            nearest_branch_km: proximity.nearest_km,
            place_id: candidate.place_id.clone(),
            business_status: details.business_status,
        });

        if config.detail_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.detail_delay_ms)).await;
        }
    }

    records
}
