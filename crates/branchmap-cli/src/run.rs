//! End-to-end survey run: grid, sweep, dedup, enrich, export.
//!
//! Called from `main` after config and profile are established. Stage-level
//! failures inside the sweep and enrichment are logged and skipped by those
//! stages, and an export failure downgrades to a no-result run; only setup
//! errors abort.

use branchmap_core::{AppConfig, SurveyProfile};
use branchmap_places::PlacesClient;
use branchmap_survey::sweep::FAILED_TILE_PAUSE_MS;
use branchmap_survey::{
    dedup_branches, enrich_branches, generate_grid, search_radius_m, sweep_grid, write_csv,
    EnrichConfig, GridConfig, SweepConfig,
};

/// Run the full survey pipeline. Returns the exported filename, or `None`
/// when no branch survived filtering and there was nothing to export.
pub(crate) async fn run_survey(
    client: &PlacesClient,
    config: &AppConfig,
    profile: &SurveyProfile,
    spacing_km: f64,
    output: Option<&str>,
) -> anyhow::Result<Option<String>> {
    let grid = GridConfig {
        lat_min: profile.bounds.lat_min,
        lat_max: profile.bounds.lat_max,
        lng_min: profile.bounds.lng_min,
        lng_max: profile.bounds.lng_max,
        spacing_km,
        ref_latitude_deg: profile.ref_latitude_deg,
    };
    let tiles = generate_grid(&grid);
    tracing::info!(
        brand = %profile.brand,
        tiles = tiles.len(),
        spacing_km,
        "starting survey sweep"
    );

    let sweep_config = SweepConfig {
        radius_m: search_radius_m(spacing_km),
        keyword: profile.search_keyword.clone(),
        language: profile.language.clone(),
        page_delay_ms: config.page_delay_ms,
        failed_tile_pause_ms: FAILED_TILE_PAUSE_MS,
    };
    let raw_hits = sweep_grid(client, &tiles, &sweep_config).await;
    tracing::info!(raw_hits = raw_hits.len(), "sweep finished");

    let candidates = dedup_branches(raw_hits, &profile.brand_tokens);
    tracing::info!(unique = candidates.len(), "deduplication finished");

    if candidates.is_empty() {
        tracing::error!(brand = %profile.brand, "no branches found; nothing to enrich");
        return Ok(None);
    }

    let enrich_config = EnrichConfig {
        language: profile.language.clone(),
        detail_delay_ms: config.detail_delay_ms,
    };
    let records = enrich_branches(client, &candidates, &enrich_config).await;
    tracing::info!(enriched = records.len(), "enrichment finished");

    match write_csv(&records, output) {
        Ok(filename) => Ok(filename),
        Err(e) => {
            tracing::error!(error = %e, "export failed; survey data not written");
            Ok(None)
        }
    }
}
