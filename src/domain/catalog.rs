//! Option catalogs offered by the onboarding wizard
//!
//! The server stores whatever trimmed string the client sends for choice
//! fields; these lists only describe what the app offers.

use serde::Serialize;

use super::profile::{PROFILE_SCHEMA_VERSION, REQUIRED_FIELDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn option(id: &'static str, label: &'static str) -> CatalogOption {
    CatalogOption { id, label }
}

pub const TRAVEL_INTERESTS: &[CatalogOption] = &[
    option("adventure", "Adventure Sports"),
    option("beaches", "Beach & Relaxation"),
    option("photography", "Photography"),
    option("culinary", "Culinary Experiences"),
    option("cultural", "Cultural Sites"),
    option("nature", "Nature & Wildlife"),
    option("backpacking", "Backpacking"),
    option("wellness", "Wellness & Spa"),
];

pub const ACCOMMODATIONS: &[CatalogOption] = &[
    option("luxury", "Luxury Hotels"),
    option("boutique", "Boutique Hotels"),
    option("hostels", "Hostels"),
    option("airbnb", "Airbnb/Vacation Rentals"),
    option("camping", "Camping"),
    option("mixed", "Mix of Different Types"),
];

pub const BUDGET_RANGES: &[CatalogOption] = &[
    option("budget", "Budget ($0-50/day)"),
    option("mid-range", "Mid-range ($51-150/day)"),
    option("luxury", "Luxury ($151-300/day)"),
    option("ultra-luxury", "Ultra-luxury ($300+/day)"),
];

pub const DIETARY_OPTIONS: &[CatalogOption] = &[
    option("none", "No Restrictions"),
    option("vegetarian", "Vegetarian"),
    option("vegan", "Vegan"),
    option("gluten-free", "Gluten-Free"),
    option("dairy-free", "Dairy-Free"),
    option("halal", "Halal"),
    option("kosher", "Kosher"),
    option("pescatarian", "Pescatarian"),
];

pub const VISA_STATUSES: &[CatalogOption] = &[
    option("us-citizen", "US Citizen"),
    option("permanent-resident", "US Permanent Resident"),
    option("student-visa", "Student Visa (F-1/M-1)"),
    option("work-visa", "Work Visa (H-1B/L-1/O-1)"),
    option("tourist-visa", "Tourist Visa (B-1/B-2)"),
    option("other", "Other Visa Status"),
    option("no-visa", "No US Visa Required"),
];

pub const NATIONALITIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Japan",
    "South Korea",
    "India",
    "Brazil",
    "Mexico",
    "Netherlands",
    "Sweden",
    "Other",
];

pub fn contains(options: &[CatalogOption], id: &str) -> bool {
    options.iter().any(|option| option.id == id)
}

/// Response DTO for `GET /profile/options`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOptions {
    pub schema_version: u32,
    pub required_fields: Vec<&'static str>,
    pub travel_interests: &'static [CatalogOption],
    pub accommodations: &'static [CatalogOption],
    pub budget_ranges: &'static [CatalogOption],
    pub dietary_options: &'static [CatalogOption],
    pub visa_statuses: &'static [CatalogOption],
    pub nationalities: &'static [&'static str],
}

impl ProfileOptions {
    pub fn current() -> Self {
        Self {
            schema_version: PROFILE_SCHEMA_VERSION,
            required_fields: REQUIRED_FIELDS.iter().map(|f| f.json_key()).collect(),
            travel_interests: TRAVEL_INTERESTS,
            accommodations: ACCOMMODATIONS,
            budget_ranges: BUDGET_RANGES,
            dietary_options: DIETARY_OPTIONS,
            visa_statuses: VISA_STATUSES,
            nationalities: NATIONALITIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::DIETARY_NONE;

    #[test]
    fn dietary_catalog_offers_the_none_sentinel() {
        assert!(contains(DIETARY_OPTIONS, DIETARY_NONE));
    }

    #[test]
    fn catalog_ids_are_unique() {
        for catalog in [
            TRAVEL_INTERESTS,
            ACCOMMODATIONS,
            BUDGET_RANGES,
            DIETARY_OPTIONS,
            VISA_STATUSES,
        ] {
            let mut ids: Vec<&str> = catalog.iter().map(|o| o.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), catalog.len());
        }
    }

    #[test]
    fn options_expose_required_field_keys() {
        let options = ProfileOptions::current();
        assert_eq!(options.required_fields.len(), REQUIRED_FIELDS.len());
        assert!(options.required_fields.contains(&"travelInterests"));
        assert!(!options.required_fields.contains(&"dietaryRestrictions"));
    }
}
