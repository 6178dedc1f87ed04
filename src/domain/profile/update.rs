//! Partial profile updates
//!
//! Only keys present in the request body are written; absent keys leave the
//! stored value alone. An explicit empty string is present and overwrites.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Profile, ProfileField, DIETARY_NONE};
use crate::domain::validation::FieldError;

/// Request DTO for updating a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

impl ProfileUpdate {
    /// Validate a raw request body.
    ///
    /// Every malformed field is reported, not just the first one. Unknown
    /// keys and `profileCompleted` are ignored.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::new("body", "must be a JSON object")]);
        };

        let mut errors = Vec::new();
        let update = Self {
            full_name: text(object, ProfileField::FullName, &mut errors),
            phone: text(object, ProfileField::Phone, &mut errors),
            date_of_birth: text(object, ProfileField::DateOfBirth, &mut errors),
            nationality: text(object, ProfileField::Nationality, &mut errors),
            travel_interests: tags(object, ProfileField::TravelInterests, &mut errors),
            dietary_restrictions: tags(object, ProfileField::DietaryRestrictions, &mut errors),
            accommodation_preference: text(
                object,
                ProfileField::AccommodationPreference,
                &mut errors,
            ),
            budget_range: text(object, ProfileField::BudgetRange, &mut errors),
            visa_status: text(object, ProfileField::VisaStatus, &mut errors),
            emergency_contact: text(object, ProfileField::EmergencyContact, &mut errors),
        };

        if errors.is_empty() {
            Ok(update)
        } else {
            Err(errors)
        }
    }

    /// Write the present fields onto `profile` and re-derive completeness
    /// from the merged result.
    pub fn apply_to(&self, profile: &mut Profile) {
        assign(&mut profile.full_name, &self.full_name);
        assign(&mut profile.phone, &self.phone);
        assign(&mut profile.date_of_birth, &self.date_of_birth);
        assign(&mut profile.nationality, &self.nationality);
        assign(&mut profile.travel_interests, &self.travel_interests);
        assign(&mut profile.dietary_restrictions, &self.dietary_restrictions);
        assign(
            &mut profile.accommodation_preference,
            &self.accommodation_preference,
        );
        assign(&mut profile.budget_range, &self.budget_range);
        assign(&mut profile.visa_status, &self.visa_status);
        assign(&mut profile.emergency_contact, &self.emergency_contact);

        profile.refresh_completion();
    }

    pub fn present_fields(&self) -> Vec<ProfileField> {
        let present = [
            (ProfileField::FullName, self.full_name.is_some()),
            (ProfileField::Phone, self.phone.is_some()),
            (ProfileField::DateOfBirth, self.date_of_birth.is_some()),
            (ProfileField::Nationality, self.nationality.is_some()),
            (ProfileField::TravelInterests, self.travel_interests.is_some()),
            (
                ProfileField::DietaryRestrictions,
                self.dietary_restrictions.is_some(),
            ),
            (
                ProfileField::AccommodationPreference,
                self.accommodation_preference.is_some(),
            ),
            (ProfileField::BudgetRange, self.budget_range.is_some()),
            (ProfileField::VisaStatus, self.visa_status.is_some()),
            (ProfileField::EmergencyContact, self.emergency_contact.is_some()),
        ];

        present
            .into_iter()
            .filter_map(|(field, is_present)| is_present.then_some(field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }
}

/// Every field present, as submitted at the end of onboarding.
impl From<&Profile> for ProfileUpdate {
    fn from(profile: &Profile) -> Self {
        Self {
            full_name: Some(profile.full_name.clone()),
            phone: Some(profile.phone.clone()),
            date_of_birth: Some(profile.date_of_birth.clone()),
            nationality: Some(profile.nationality.clone()),
            travel_interests: Some(profile.travel_interests.clone()),
            dietary_restrictions: Some(profile.dietary_restrictions.clone()),
            accommodation_preference: Some(profile.accommodation_preference.clone()),
            budget_range: Some(profile.budget_range.clone()),
            visa_status: Some(profile.visa_status.clone()),
            emergency_contact: Some(profile.emergency_contact.clone()),
        }
    }
}

fn assign<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

fn text(
    object: &Map<String, Value>,
    field: ProfileField,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let raw = object.get(field.json_key())?;

    let Some(value) = raw.as_str() else {
        errors.push(FieldError::new(field.json_key(), "must be a string"));
        return None;
    };

    let value = value.trim();
    if field == ProfileField::FullName && value.is_empty() {
        errors.push(FieldError::new(field.json_key(), "must not be empty"));
        return None;
    }

    Some(value.to_string())
}

fn tags(
    object: &Map<String, Value>,
    field: ProfileField,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<String>> {
    let raw = object.get(field.json_key())?;

    let Some(items) = raw.as_array() else {
        errors.push(FieldError::new(field.json_key(), "must be an array of strings"));
        return None;
    };

    let mut collected: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let Some(tag) = item.as_str().map(str::trim) else {
            errors.push(FieldError::new(field.json_key(), "must be an array of strings"));
            return None;
        };
        if tag.is_empty() {
            errors.push(FieldError::new(field.json_key(), "entries must not be empty"));
            return None;
        }
        if !collected.iter().any(|existing| existing == tag) {
            collected.push(tag.to_string());
        }
    }

    if field == ProfileField::DietaryRestrictions
        && collected.len() > 1
        && collected.iter().any(|tag| tag == DIETARY_NONE)
    {
        errors.push(FieldError::new(
            field.json_key(),
            "\"none\" cannot be combined with other restrictions",
        ));
        return None;
    }

    Some(collected)
}
