//! Per-tile nearby-search sweep with pagination.
//!
//! Each tile is searched once, following next-page tokens with an enforced
//! delay (the upstream API rejects tokens redeemed too early). A failed tile
//! is logged and skipped; partial coverage is accepted, and there are no
//! retries.

use std::time::Duration;

use branchmap_places::{PlaceSummary, PlacesClient, PlacesError};

use crate::grid::GridPoint;

/// Upstream serves at most three pages per search; anything past this is a
/// misbehaving token loop.
pub const MAX_PAGES_PER_TILE: usize = 5;

/// Pause after a failed tile before moving on to the next one.
pub const FAILED_TILE_PAUSE_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub radius_m: u32,
    pub keyword: String,
    pub language: String,
    /// Delay before redeeming each next-page token.
    pub page_delay_ms: u64,
    /// Pause after a failed tile.
    pub failed_tile_pause_ms: u64,
}

/// Sweep every tile in order, aggregating raw hits across all pages of all
/// tiles. Hits are returned in tile order, page order within a tile.
///
/// Per-tile failures (network, quota, malformed response) are logged and the
/// tile is skipped; pages fetched before the failure are kept.
pub async fn sweep_grid(
    client: &PlacesClient,
    tiles: &[GridPoint],
    config: &SweepConfig,
) -> Vec<PlaceSummary> {
    let mut all_hits = Vec::new();

    for (i, tile) in tiles.iter().enumerate() {
        tracing::info!(tile = i + 1, total = tiles.len(), "searching grid tile");
        if let Err(e) = sweep_tile(client, tile, config, &mut all_hits).await {
            tracing::warn!(
                lat = tile.lat,
                lng = tile.lng,
                error = %e,
                "tile search failed; skipping tile"
            );
            if config.failed_tile_pause_ms > 0 {
                tokio::time::sleep(Duration::from_millis(config.failed_tile_pause_ms)).await;
            }
        }
    }

    all_hits
}

/// Search one tile, appending every page's results to `out` as they arrive
/// so a mid-pagination failure keeps the pages already fetched.
async fn sweep_tile(
    client: &PlacesClient,
    tile: &GridPoint,
    config: &SweepConfig,
    out: &mut Vec<PlaceSummary>,
) -> Result<(), PlacesError> {
    let mut page = client
        .nearby_search(
            tile.lat,
            tile.lng,
            config.radius_m,
            &config.keyword,
            &config.language,
        )
        .await?;
    out.extend(page.results);

    let mut pages = 1;
    while let Some(token) = page.next_page_token.take() {
        if pages >= MAX_PAGES_PER_TILE {
            tracing::warn!(
                lat = tile.lat,
                lng = tile.lng,
                pages,
                "page cap reached for tile; abandoning remaining pages"
            );
            break;
        }
        if config.page_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.page_delay_ms)).await;
        }
        page = client.nearby_search_page(&token).await?;
        out.extend(page.results);
        pages += 1;
    }

    Ok(())
}
