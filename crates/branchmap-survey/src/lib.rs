//! Survey pipeline: grid search, dedup, enrichment, and export.
//!
//! The stages run strictly in sequence: [`grid::generate_grid`] tiles the
//! territory, [`sweep::sweep_grid`] queries every tile (paginating with
//! enforced delays), [`dedup::dedup_branches`] collapses the raw hits into
//! unique branches, [`enrich::enrich_branches`] attaches detail and derived
//! analytics to each one, and [`export::write_csv`] produces the flat file.

pub mod analysis;
pub mod dedup;
pub mod enrich;
pub mod export;
pub mod grid;
pub mod roadside;
pub mod segment;
pub mod sweep;

pub use analysis::{geodesic_km, proximity_stats, ProximityStats};
pub use dedup::dedup_branches;
pub use enrich::{enrich_branches, BranchRecord, EnrichConfig};
pub use export::{write_csv, ExportError};
pub use grid::{generate_grid, search_radius_m, GridConfig, GridPoint};
pub use roadside::{classify_roadside, LocationType};
pub use segment::{classify_audience, join_audience, AudienceSegment};
pub use sweep::{sweep_grid, SweepConfig};
