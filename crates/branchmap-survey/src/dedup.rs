//! Candidate filtering: collapse raw search hits into unique branches.

use std::collections::HashSet;

use branchmap_places::PlaceSummary;

/// Filter raw hits down to unique branches of the surveyed brand.
///
/// A hit is kept only if it has a non-empty place id not seen before and its
/// name contains at least one brand token (case-insensitive, so both Thai and
/// Latin spellings match). First occurrence wins; output preserves the order
/// hits arrived in.
#[must_use]
pub fn dedup_branches(hits: Vec<PlaceSummary>, brand_tokens: &[String]) -> Vec<PlaceSummary> {
    let tokens: Vec<String> = brand_tokens.iter().map(|t| t.to_lowercase()).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for hit in hits {
        if hit.place_id.is_empty() || seen.contains(&hit.place_id) {
            continue;
        }
        let name = hit.name.to_lowercase();
        if !tokens.iter().any(|t| name.contains(t)) {
            continue;
        }
        seen.insert(hit.place_id.clone());
        unique.push(hit);
    }

    unique
}
