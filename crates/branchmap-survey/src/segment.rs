//! Audience segmentation from place types and name/address keywords.
//!
//! Two tiers: the structured place types from the search hit are
//! authoritative; name/address keywords are only consulted when the types
//! yield nothing, since free text is far noisier than the tag taxonomy.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AudienceSegment {
    Medical,
    Students,
    Shoppers,
    Motorists,
    Commuters,
}

impl AudienceSegment {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Medical => "patients/medical staff",
            Self::Students => "students",
            Self::Shoppers => "shoppers",
            Self::Motorists => "motorists/travelers",
            Self::Commuters => "commuters/tourists",
        }
    }
}

/// (segment, place types that imply it).
const TYPE_RULES: &[(AudienceSegment, &[&str])] = &[
    (
        AudienceSegment::Medical,
        &["hospital", "doctor", "health", "clinic"],
    ),
    (
        AudienceSegment::Students,
        &["school", "university", "college"],
    ),
    (
        AudienceSegment::Shoppers,
        &["shopping_mall", "department_store", "store"],
    ),
    (AudienceSegment::Motorists, &["gas_station"]),
    (
        AudienceSegment::Commuters,
        &["train_station", "bus_station", "airport", "transit_station"],
    ),
];

/// (segment, lowercase name/address fragments that imply it). Thai fragments
/// stay in Thai; lowercasing only affects the Latin ones.
const KEYWORD_RULES: &[(AudienceSegment, &[&str])] = &[
    (
        AudienceSegment::Medical,
        &["โรงพยาบาล", "รพ.", "clinic", "คลินิก", "hospital"],
    ),
    (
        AudienceSegment::Students,
        &["โรงเรียน", "มหาลัย", "university", "school", "college"],
    ),
    (
        AudienceSegment::Shoppers,
        &["ห้าง", "mall", "department store", "shopping"],
    ),
    (
        AudienceSegment::Motorists,
        &["ปตท", "บางจาก", "esso", "shell", "ปั๊ม", "gas station"],
    ),
    (
        AudienceSegment::Commuters,
        &[
            "สถานีรถไฟ",
            "สถานีขนส่ง",
            "สนามบิน",
            "airport",
            "bus terminal",
            "train station",
        ],
    ),
];

/// Infer audience segments for one branch.
///
/// `summary_types` are the structured types from the original search hit
/// (details requests don't ask for types). The keyword fallback scans the
/// detail name and address only when no type rule fired.
#[must_use]
pub fn classify_audience(
    summary_types: &[String],
    detail_name: &str,
    detail_address: &str,
) -> BTreeSet<AudienceSegment> {
    let mut segments = BTreeSet::new();

    for (segment, tags) in TYPE_RULES {
        if summary_types
            .iter()
            .any(|t| tags.iter().any(|tag| t == tag))
        {
            segments.insert(*segment);
        }
    }

    if segments.is_empty() {
        let haystack = format!("{detail_name} {detail_address}").to_lowercase();
        for (segment, keywords) in KEYWORD_RULES {
            if keywords.iter().any(|kw| haystack.contains(kw)) {
                segments.insert(*segment);
            }
        }
    }

    segments
}

/// Render the segment set as the export column value. `None` when no segment
/// was inferred, so the CSV cell stays empty.
#[must_use]
pub fn join_audience(segments: &BTreeSet<AudienceSegment>) -> Option<String> {
    if segments.is_empty() {
        return None;
    }
    Some(
        segments
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(ts: &[&str]) -> Vec<String> {
        ts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn gas_station_type_maps_to_motorists() {
        let segments = classify_audience(&types(&["cafe", "gas_station", "food"]), "", "");
        assert_eq!(segments.len(), 1);
        assert!(segments.contains(&AudienceSegment::Motorists));
    }

    #[test]
    fn multiple_type_rules_can_fire() {
        let segments = classify_audience(&types(&["hospital", "store"]), "", "");
        assert!(segments.contains(&AudienceSegment::Medical));
        assert!(segments.contains(&AudienceSegment::Shoppers));
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn type_match_suppresses_keyword_fallback() {
        // Types already identified motorists; the hospital keyword in the
        // address must not add a second segment.
        let segments = classify_audience(
            &types(&["gas_station"]),
            "Cafe Amazon",
            "ตรงข้ามโรงพยาบาลลำปาง",
        );
        assert_eq!(segments.len(), 1);
        assert!(segments.contains(&AudienceSegment::Motorists));
    }

    #[test]
    fn thai_keyword_fallback_fires_without_types() {
        let segments = classify_audience(
            &types(&["cafe", "food"]),
            "คาเฟ่ อเมซอน สาขาโรงพยาบาลศิริราช",
            "กรุงเทพมหานคร",
        );
        assert!(segments.contains(&AudienceSegment::Medical));
    }

    #[test]
    fn latin_keyword_fallback_is_case_insensitive() {
        let segments = classify_audience(
            &types(&["cafe"]),
            "Cafe Amazon",
            "Suvarnabhumi AIRPORT, Samut Prakan",
        );
        assert!(segments.contains(&AudienceSegment::Commuters));
    }

    #[test]
    fn no_signal_yields_empty_set() {
        let segments = classify_audience(&types(&["cafe", "food"]), "Cafe Amazon", "ริมถนนสายรอง");
        assert!(segments.is_empty());
        assert_eq!(join_audience(&segments), None);
    }

    #[test]
    fn join_orders_segments_deterministically() {
        let mut segments = BTreeSet::new();
        segments.insert(AudienceSegment::Commuters);
        segments.insert(AudienceSegment::Medical);
        assert_eq!(
            join_audience(&segments).as_deref(),
            Some("patients/medical staff, commuters/tourists")
        );
    }
}
