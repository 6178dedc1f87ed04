use proptest::prelude::*;
use proptest::test_runner::Config;
use serde_json::{json, Map, Value};
use travelmate_backend::domain::profile::{Profile, ProfileField, ProfileUpdate, REQUIRED_FIELDS};

/// Empty, blank, or filled text.
fn text_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[A-Za-z0-9 ]{0,8}[A-Za-z0-9]",
    ]
}

fn tag_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..4)
}

prop_compose! {
    fn any_profile()(
        full_name in text_value(),
        phone in text_value(),
        date_of_birth in text_value(),
        nationality in text_value(),
        travel_interests in tag_values(),
        dietary_restrictions in tag_values(),
        accommodation_preference in text_value(),
        budget_range in text_value(),
        visa_status in text_value(),
        emergency_contact in text_value(),
        profile_completed in any::<bool>(),
    ) -> Profile {
        Profile {
            full_name,
            phone,
            date_of_birth,
            nationality,
            travel_interests,
            dietary_restrictions,
            accommodation_preference,
            budget_range,
            visa_status,
            emergency_contact,
            profile_completed,
        }
    }
}

/// A request body carrying an arbitrary subset of well-formed fields.
fn any_update_body() -> impl Strategy<Value = Value> {
    let fields = ProfileField::ALL.len();
    (
        prop::collection::vec(any::<bool>(), fields),
        prop::collection::vec("[a-z]{1,6}", fields),
    )
        .prop_map(|(present, values)| {
            let mut body = Map::new();
            for ((field, keep), value) in ProfileField::ALL.iter().zip(present).zip(values) {
                if !keep {
                    continue;
                }
                let encoded = match field {
                    ProfileField::TravelInterests | ProfileField::DietaryRestrictions => {
                        json!([value])
                    }
                    _ => json!(value),
                };
                body.insert(field.json_key().to_string(), encoded);
            }
            Value::Object(body)
        })
}

fn expected_completion(profile: &Profile) -> bool {
    let scalars = [
        &profile.full_name,
        &profile.phone,
        &profile.date_of_birth,
        &profile.nationality,
        &profile.visa_status,
        &profile.emergency_contact,
    ];
    scalars.iter().all(|v| !v.trim().is_empty())
        && !profile.travel_interests.is_empty()
        && !profile.accommodation_preference.trim().is_empty()
        && !profile.budget_range.trim().is_empty()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn completion_holds_exactly_when_required_fields_are_filled(mut profile in any_profile()) {
        profile.refresh_completion();
        prop_assert_eq!(profile.profile_completed, expected_completion(&profile));
        prop_assert_eq!(
            profile.profile_completed,
            REQUIRED_FIELDS.iter().all(|f| profile.field_filled(*f))
        );
    }

    #[test]
    fn partial_update_never_clears_absent_fields(
        stored in any_profile(),
        body in any_update_body(),
    ) {
        let update = ProfileUpdate::from_json(&body).expect("well-formed body");
        let mut merged = stored.clone();
        update.apply_to(&mut merged);

        let present = update.present_fields();
        for field in ProfileField::ALL {
            if !present.contains(&field) {
                prop_assert_eq!(merged.value(field), stored.value(field));
            }
        }
        prop_assert_eq!(merged.profile_completed, expected_completion(&merged));
    }
}
