use thiserror::Error;

use super::{step_gate, toggle_dietary, toggle_interest, OnboardingStep};
use crate::domain::catalog::{self, CatalogOption};
use crate::domain::profile::{Profile, ProfileField, ProfileUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("Please fill in all required fields in {} before continuing.", step.title())]
    Incomplete { step: OnboardingStep },

    #[error("Unknown {field} option: {id}")]
    UnknownOption { field: ProfileField, id: String },
}

/// Outcome of pressing "next".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(OnboardingStep),
    /// Last step passed; send this body to `PUT /profile/update`.
    Submit(ProfileUpdate),
}

/// Wizard state: the current step plus the form draft it edits.
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    form: Profile,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::resume(Profile::default())
    }

    /// Start from values the server already holds.
    pub fn resume(form: Profile) -> Self {
        Self {
            step: OnboardingStep::PersonalInfo,
            form,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn form(&self) -> &Profile {
        &self.form
    }

    /// Merge a partial field set into the draft.
    pub fn update(&mut self, update: &ProfileUpdate) {
        update.apply_to(&mut self.form);
    }

    pub fn toggle_interest(&mut self, id: &str) -> Result<(), OnboardingError> {
        known(catalog::TRAVEL_INTERESTS, ProfileField::TravelInterests, id)?;
        let travel_interests = toggle_interest(&self.form.travel_interests, id);
        self.update(&ProfileUpdate {
            travel_interests: Some(travel_interests),
            ..ProfileUpdate::default()
        });
        Ok(())
    }

    pub fn toggle_dietary(&mut self, id: &str) -> Result<(), OnboardingError> {
        known(catalog::DIETARY_OPTIONS, ProfileField::DietaryRestrictions, id)?;
        let dietary_restrictions = toggle_dietary(&self.form.dietary_restrictions, id);
        self.update(&ProfileUpdate {
            dietary_restrictions: Some(dietary_restrictions),
            ..ProfileUpdate::default()
        });
        Ok(())
    }

    pub fn select_accommodation(&mut self, id: &str) -> Result<(), OnboardingError> {
        known(catalog::ACCOMMODATIONS, ProfileField::AccommodationPreference, id)?;
        self.update(&ProfileUpdate {
            accommodation_preference: Some(id.to_string()),
            ..ProfileUpdate::default()
        });
        Ok(())
    }

    pub fn select_budget(&mut self, id: &str) -> Result<(), OnboardingError> {
        known(catalog::BUDGET_RANGES, ProfileField::BudgetRange, id)?;
        self.update(&ProfileUpdate {
            budget_range: Some(id.to_string()),
            ..ProfileUpdate::default()
        });
        Ok(())
    }

    pub fn select_visa_status(&mut self, id: &str) -> Result<(), OnboardingError> {
        known(catalog::VISA_STATUSES, ProfileField::VisaStatus, id)?;
        self.update(&ProfileUpdate {
            visa_status: Some(id.to_string()),
            ..ProfileUpdate::default()
        });
        Ok(())
    }

    pub fn can_advance(&self) -> bool {
        step_gate(&self.form, self.step.index())
    }

    pub fn advance(&mut self) -> Result<Advance, OnboardingError> {
        if !self.can_advance() {
            return Err(OnboardingError::Incomplete { step: self.step });
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(Advance::Moved(next))
            }
            None => Ok(Advance::Submit(ProfileUpdate::from(&self.form))),
        }
    }

    /// Returns false on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }
}

fn known(options: &[CatalogOption], field: ProfileField, id: &str) -> Result<(), OnboardingError> {
    if catalog::contains(options, id) {
        Ok(())
    } else {
        Err(OnboardingError::UnknownOption {
            field,
            id: id.to_string(),
        })
    }
}
