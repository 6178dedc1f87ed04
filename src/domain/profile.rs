//! Traveller profile domain types
//!
//! The profile is a sub-document of every user record. It is created empty at
//! registration and only ever changes through a [`ProfileUpdate`].
//! `profile_completed` is derived from [`REQUIRED_FIELDS`] and is the flag
//! the app uses to choose between onboarding and the main screens.

mod update;

use serde::{Deserialize, Serialize};
use std::fmt;

use super::auth::UserResponse;

pub use update::ProfileUpdate;

/// Bump whenever [`REQUIRED_FIELDS`] changes so clients can detect drift.
pub const PROFILE_SCHEMA_VERSION: u32 = 1;

/// Dietary sentinel that excludes every other dietary tag.
pub const DIETARY_NONE: &str = "none";

/// Writable profile fields, named by their wire keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FullName,
    Phone,
    DateOfBirth,
    Nationality,
    TravelInterests,
    DietaryRestrictions,
    AccommodationPreference,
    BudgetRange,
    VisaStatus,
    EmergencyContact,
}

impl ProfileField {
    pub const ALL: [ProfileField; 10] = [
        Self::FullName,
        Self::Phone,
        Self::DateOfBirth,
        Self::Nationality,
        Self::TravelInterests,
        Self::DietaryRestrictions,
        Self::AccommodationPreference,
        Self::BudgetRange,
        Self::VisaStatus,
        Self::EmergencyContact,
    ];

    pub fn json_key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Phone => "phone",
            Self::DateOfBirth => "dateOfBirth",
            Self::Nationality => "nationality",
            Self::TravelInterests => "travelInterests",
            Self::DietaryRestrictions => "dietaryRestrictions",
            Self::AccommodationPreference => "accommodationPreference",
            Self::BudgetRange => "budgetRange",
            Self::VisaStatus => "visaStatus",
            Self::EmergencyContact => "emergencyContact",
        }
    }

    pub fn is_required(self) -> bool {
        REQUIRED_FIELDS.contains(&self)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

/// Fields that must be filled for a profile to count as completed.
///
/// This is the one list both the server-side completeness check and the
/// onboarding step gates read from.
pub const REQUIRED_FIELDS: [ProfileField; 9] = [
    ProfileField::FullName,
    ProfileField::Phone,
    ProfileField::DateOfBirth,
    ProfileField::Nationality,
    ProfileField::VisaStatus,
    ProfileField::EmergencyContact,
    ProfileField::TravelInterests,
    ProfileField::AccommodationPreference,
    ProfileField::BudgetRange,
];

/// Borrowed view of one field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Tags(&'a [String]),
}

/// Traveller profile document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: String,
    pub nationality: String,
    pub travel_interests: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub accommodation_preference: String,
    pub budget_range: String,
    pub visa_status: String,
    pub emergency_contact: String,
    pub profile_completed: bool,
}

impl Profile {
    pub fn value(&self, field: ProfileField) -> FieldValue<'_> {
        match field {
            ProfileField::FullName => FieldValue::Text(&self.full_name),
            ProfileField::Phone => FieldValue::Text(&self.phone),
            ProfileField::DateOfBirth => FieldValue::Text(&self.date_of_birth),
            ProfileField::Nationality => FieldValue::Text(&self.nationality),
            ProfileField::TravelInterests => FieldValue::Tags(&self.travel_interests),
            ProfileField::DietaryRestrictions => FieldValue::Tags(&self.dietary_restrictions),
            ProfileField::AccommodationPreference => {
                FieldValue::Text(&self.accommodation_preference)
            }
            ProfileField::BudgetRange => FieldValue::Text(&self.budget_range),
            ProfileField::VisaStatus => FieldValue::Text(&self.visa_status),
            ProfileField::EmergencyContact => FieldValue::Text(&self.emergency_contact),
        }
    }

    /// Text counts as filled when non-blank, tag sets when non-empty.
    pub fn field_filled(&self, field: ProfileField) -> bool {
        match self.value(field) {
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Tags(tags) => !tags.is_empty(),
        }
    }

    pub fn is_complete(&self) -> bool {
        REQUIRED_FIELDS
            .iter()
            .all(|field| self.field_filled(*field))
    }

    pub fn missing_fields(&self) -> Vec<ProfileField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.field_filled(*field))
            .collect()
    }

    /// Re-derive `profile_completed` from the stored values.
    pub fn refresh_completion(&mut self) {
        self.profile_completed = self.is_complete();
    }
}

/// Response DTO for `GET /profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub profile: Profile,
}

/// Response DTO for `PUT /profile/update`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub user: UserResponse,
}
