//! Client-side onboarding flow
//!
//! A four-step linear wizard over a single profile draft. Each step is gated
//! on the required fields it collects; the gates read the same
//! [`REQUIRED_FIELDS`](crate::domain::profile::REQUIRED_FIELDS) list the
//! server uses for completeness.

mod navigation;
mod wizard;

use serde::{Deserialize, Serialize};

use crate::domain::profile::{Profile, ProfileField, DIETARY_NONE};

pub use navigation::{route_for, AppRoute};
pub use wizard::{Advance, OnboardingError, OnboardingWizard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    PersonalInfo,
    TravelInterests,
    DietaryNeeds,
    VisaDocumentation,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        Self::PersonalInfo,
        Self::TravelInterests,
        Self::DietaryNeeds,
        Self::VisaDocumentation,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::TravelInterests => 1,
            Self::DietaryNeeds => 2,
            Self::VisaDocumentation => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::TravelInterests => "Travel Interests",
            Self::DietaryNeeds => "Dietary Preferences",
            Self::VisaDocumentation => "Visa Documentation",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Fields that must be filled before leaving this step.
    pub fn required_fields(self) -> &'static [ProfileField] {
        match self {
            Self::PersonalInfo => &[
                ProfileField::FullName,
                ProfileField::Phone,
                ProfileField::DateOfBirth,
                ProfileField::Nationality,
            ],
            Self::TravelInterests => &[
                ProfileField::TravelInterests,
                ProfileField::AccommodationPreference,
                ProfileField::BudgetRange,
            ],
            // Dietary needs are optional.
            Self::DietaryNeeds => &[],
            Self::VisaDocumentation => &[ProfileField::VisaStatus, ProfileField::EmergencyContact],
        }
    }
}

/// Whether the wizard may leave step `step_index` with `form` as filled in.
///
/// Out-of-range indices never pass.
pub fn step_gate(form: &Profile, step_index: usize) -> bool {
    OnboardingStep::from_index(step_index).is_some_and(|step| {
        step.required_fields()
            .iter()
            .all(|field| form.field_filled(*field))
    })
}

/// Toggle a dietary tag. `"none"` clears everything else; any other tag
/// first drops `"none"`.
pub fn toggle_dietary(current: &[String], tag: &str) -> Vec<String> {
    if tag == DIETARY_NONE {
        return vec![DIETARY_NONE.to_string()];
    }

    if current.iter().any(|t| t == tag) {
        current.iter().filter(|t| *t != tag).cloned().collect()
    } else {
        let mut updated: Vec<String> = current
            .iter()
            .filter(|t| *t != DIETARY_NONE)
            .cloned()
            .collect();
        updated.push(tag.to_string());
        updated
    }
}

pub fn toggle_interest(current: &[String], tag: &str) -> Vec<String> {
    if current.iter().any(|t| t == tag) {
        current.iter().filter(|t| *t != tag).cloned().collect()
    } else {
        let mut updated = current.to_vec();
        updated.push(tag.to_string());
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::REQUIRED_FIELDS;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn personal_step_waits_for_date_of_birth() {
        let mut form = Profile {
            full_name: "A".into(),
            phone: "1".into(),
            date_of_birth: String::new(),
            nationality: "US".into(),
            ..Profile::default()
        };
        assert!(!step_gate(&form, 0));

        form.date_of_birth = "01/01/1990".into();
        assert!(step_gate(&form, 0));
    }

    #[test]
    fn interests_step_needs_tags_and_both_choices() {
        let mut form = Profile {
            travel_interests: tags(&["nature"]),
            accommodation_preference: "hostels".into(),
            ..Profile::default()
        };
        assert!(!step_gate(&form, 1));

        form.budget_range = "budget".into();
        assert!(step_gate(&form, 1));

        form.travel_interests.clear();
        assert!(!step_gate(&form, 1));
    }

    #[test]
    fn dietary_step_always_passes() {
        assert!(step_gate(&Profile::default(), 2));
    }

    #[test]
    fn visa_step_needs_status_and_contact() {
        let mut form = Profile {
            visa_status: "tourist-visa".into(),
            ..Profile::default()
        };
        assert!(!step_gate(&form, 3));

        form.emergency_contact = "Jane, +1 555 0100".into();
        assert!(step_gate(&form, 3));
    }

    #[test]
    fn unknown_step_never_passes() {
        assert!(!step_gate(&Profile::default(), 4));
        assert!(!step_gate(&Profile::default(), usize::MAX));
    }

    #[test]
    fn step_requirements_cover_the_required_field_list() {
        let mut from_steps: Vec<ProfileField> = OnboardingStep::ALL
            .iter()
            .flat_map(|step| step.required_fields().iter().copied())
            .collect();
        from_steps.sort_by_key(|f| f.json_key());

        let mut required = REQUIRED_FIELDS.to_vec();
        required.sort_by_key(|f| f.json_key());

        assert_eq!(from_steps, required);
    }

    #[test]
    fn none_clears_other_dietary_tags() {
        let current = tags(&["vegan", "halal"]);
        let after_none = toggle_dietary(&current, "none");
        assert_eq!(after_none, tags(&["none"]));

        let after_vegan = toggle_dietary(&after_none, "vegan");
        assert_eq!(after_vegan, tags(&["vegan"]));
    }

    #[test]
    fn dietary_toggle_removes_selected_tag() {
        let current = tags(&["vegan", "halal"]);
        assert_eq!(toggle_dietary(&current, "vegan"), tags(&["halal"]));
    }

    #[test]
    fn interest_toggle_adds_and_removes() {
        let added = toggle_interest(&tags(&["nature"]), "beaches");
        assert_eq!(added, tags(&["nature", "beaches"]));
        assert_eq!(toggle_interest(&added, "nature"), tags(&["beaches"]));
    }

    #[test]
    fn step_order_is_linear() {
        assert_eq!(OnboardingStep::PersonalInfo.previous(), None);
        assert_eq!(
            OnboardingStep::PersonalInfo.next(),
            Some(OnboardingStep::TravelInterests)
        );
        assert!(OnboardingStep::VisaDocumentation.is_last());
        for step in OnboardingStep::ALL {
            assert_eq!(OnboardingStep::from_index(step.index()), Some(step));
        }
    }
}
