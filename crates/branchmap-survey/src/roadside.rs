//! Roadside classification from reverse-geocode results.
//!
//! A coarse ladder: named highway frontage beats street address beats
//! residential sublocality, falling back to a general-area bucket.

use branchmap_places::GeocodeResult;

/// Road-name fragments that mark a major highway. Mixed-script on purpose:
/// the geocoder returns Thai names for Thai roads.
pub const HIGHWAY_KEYWORDS: &[&str] = &[
    "ทางหลวง",
    "highway",
    "motorway",
    "ถนนมิตรภาพ",
    "ถนนสุขุมวิท",
    "ถนนพหลโยธิน",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    MajorRoad,
    SecondaryRoad,
    Residential,
    GeneralArea,
    /// Reverse geocoding returned nothing usable (or failed outright).
    Undetermined,
}

impl LocationType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MajorRoad => "major road/highway frontage",
            Self::SecondaryRoad => "secondary road/urban",
            Self::Residential => "residential/side-street",
            Self::GeneralArea => "general area",
            Self::Undetermined => "undeterminable",
        }
    }
}

/// Classify a branch's roadside setting from its reverse-geocode results.
///
/// Only the top (most specific) result is consulted; checks run in priority
/// order against its components and then its types.
#[must_use]
pub fn classify_roadside(results: &[GeocodeResult]) -> LocationType {
    let Some(top) = results.first() else {
        return LocationType::Undetermined;
    };

    for component in &top.address_components {
        if !component.types.iter().any(|t| t == "route") {
            continue;
        }
        let name = component.long_name.to_lowercase();
        if HIGHWAY_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            return LocationType::MajorRoad;
        }
    }

    if top
        .types
        .iter()
        .any(|t| t == "street_address" || t == "route")
    {
        return LocationType::SecondaryRoad;
    }
    if top.types.iter().any(|t| t == "sublocality") {
        return LocationType::Residential;
    }
    LocationType::GeneralArea
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchmap_places::AddressComponent;

    fn result(types: &[&str], components: Vec<AddressComponent>) -> GeocodeResult {
        GeocodeResult {
            types: types.iter().map(|t| (*t).to_string()).collect(),
            address_components: components,
        }
    }

    fn component(long_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            types: types.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn empty_results_are_undetermined() {
        assert_eq!(classify_roadside(&[]), LocationType::Undetermined);
    }

    #[test]
    fn named_highway_route_wins() {
        let results = vec![result(
            &["street_address"],
            vec![component("ถนนมิตรภาพ", &["route"])],
        )];
        assert_eq!(classify_roadside(&results), LocationType::MajorRoad);
    }

    #[test]
    fn highway_keyword_matches_latin_script() {
        let results = vec![result(
            &["route"],
            vec![component("Motorway 7", &["route"])],
        )];
        assert_eq!(classify_roadside(&results), LocationType::MajorRoad);
    }

    #[test]
    fn highway_name_outside_route_component_is_ignored() {
        // A locality that happens to contain a highway name must not count.
        let results = vec![result(
            &["locality"],
            vec![component("ตำบลริมทางหลวง", &["locality", "political"])],
        )];
        assert_eq!(classify_roadside(&results), LocationType::GeneralArea);
    }

    #[test]
    fn street_address_without_highway_is_secondary() {
        let results = vec![result(
            &["street_address"],
            vec![component("ถนนลาดพร้าว", &["route"])],
        )];
        assert_eq!(classify_roadside(&results), LocationType::SecondaryRoad);
    }

    #[test]
    fn highway_in_non_top_result_does_not_upgrade() {
        // Only the most specific result counts; a highway named in a broader
        // fallback result must not change the classification.
        let results = vec![
            result(&["plus_code"], vec![]),
            result(
                &["route"],
                vec![component("ถนนมิตรภาพ", &["route"])],
            ),
        ];
        assert_eq!(classify_roadside(&results), LocationType::GeneralArea);
    }

    #[test]
    fn sublocality_is_residential() {
        let results = vec![result(
            &["sublocality", "political"],
            vec![component("บางนา", &["sublocality"])],
        )];
        assert_eq!(classify_roadside(&results), LocationType::Residential);
    }

    #[test]
    fn sublocality_level_variant_alone_is_not_residential() {
        // The residential rule matches the plain tag only, not the level
        // variants.
        let results = vec![result(
            &["sublocality_level_1", "political"],
            vec![component("บางนา", &["sublocality_level_1"])],
        )];
        assert_eq!(classify_roadside(&results), LocationType::GeneralArea);
    }

    #[test]
    fn plain_locality_is_general_area() {
        let results = vec![result(
            &["locality", "political"],
            vec![component("ลำปาง", &["locality"])],
        )];
        assert_eq!(classify_roadside(&results), LocationType::GeneralArea);
    }
}
